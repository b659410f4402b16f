//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage location
//!
//! ```bash
//! # Either a full SQLite URL...
//! export DATABASE_URL="sqlite:///var/lib/linkcut/urls.db"
//!
//! # ...or just a file path
//! export DB_PATH="./urls.db"
//! ```
//!
//! `DATABASE_URL` wins when both are set. With neither, `urls.db` in the
//! working directory is used.
//!
//! ## Optional Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `8000`)
//! - `BASE_URL` - Public origin for short URLs (default: derived from each request)
//! - `SHORT_CODE_LENGTH` - Length of generated codes (default: 6, range 4-32)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: allow any origin)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

const DEFAULT_DB_PATH: &str = "urls.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public origin used to build `short_url`. `None` means "use the request origin".
    pub base_url: Option<String>,
    pub short_code_length: usize,
    /// Empty means any origin is accepted.
    pub cors_allowed_origins: Vec<String>,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT`, `SHORT_CODE_LENGTH` or `DB_MAX_CONNECTIONS`
    /// is set but is not a number of the expected type.
    pub fn from_env() -> Result<Self> {
        let database_url = database_url_from_env();

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };
        let listen_addr = format!("{host}:{port}");

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let short_code_length = match env::var("SHORT_CODE_LENGTH") {
            Ok(v) => v
                .parse::<usize>()
                .with_context(|| format!("SHORT_CODE_LENGTH must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_CODE_LENGTH,
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origin_list(&v))
            .unwrap_or_default();

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            short_code_length,
            cors_allowed_origins,
            db_max_connections,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `short_code_length` is outside 4..=32
    /// - `db_max_connections` is 0
    /// - `log_format` is not `text` or `json`
    /// - `base_url` or a CORS origin is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !(4..=32).contains(&self.short_code_length) {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 4 and 32, got {}",
                self.short_code_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref base_url) = self.base_url {
            validate_origin(base_url).context("Invalid BASE_URL")?;
        }

        for origin in &self.cors_allowed_origins {
            validate_origin(origin).context("Invalid CORS_ALLOWED_ORIGINS entry")?;
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from request"),
        }

        if self.cors_allowed_origins.is_empty() {
            tracing::warn!(
                "  CORS: any origin with credentials (set CORS_ALLOWED_ORIGINS to restrict)"
            );
        } else {
            tracing::info!("  CORS: {}", self.cors_allowed_origins.join(", "));
        }

        tracing::info!("  Short code length: {}", self.short_code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Resolves the SQLite URL from the environment.
///
/// Priority:
/// 1. `DATABASE_URL` environment variable
/// 2. `DB_PATH`, turned into `sqlite://<path>`
/// 3. `sqlite://urls.db`
pub fn database_url_from_env() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    let path = env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    format!("sqlite://{}", path)
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_origin(origin: &str) -> Result<()> {
    let parsed = Url::parse(origin).with_context(|| format!("'{origin}' is not a valid URL"))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        anyhow::bail!("'{origin}' must be an absolute http(s) URL");
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
