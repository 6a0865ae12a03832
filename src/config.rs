//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags (see `main.rs`) override the environment.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Port to bind on all interfaces when `LISTEN` is not set
//! - `BASE_URL` - Public base for short URLs (default: derived from the `Host` header)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30, range: 1-300)
//!
//! All short links are kept in memory and are lost when the process exits.

use anyhow::Result;
use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL short links are built on, without trailing slash.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = Self::load_listen_addr();

        let base_url = env::var("BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            request_timeout_secs,
        }
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        match env::var("PORT") {
            Ok(port) if !port.is_empty() => format!("0.0.0.0:{}", port),
            _ => DEFAULT_LISTEN.to_string(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `request_timeout_secs` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from Host header"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Storage: in-memory (data is lost on restart)");
    }
}
