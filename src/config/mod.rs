//! Configuration module for the LAMFO backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `members.toml` and `projects.toml`
    pub content_dir: PathBuf,
    /// Re-read content files on every request instead of once at start up
    pub content_reload: bool,
    /// Endpoint of the external chat service; the relay is disabled when unset
    pub chat_api_url: Option<String>,
    /// Timeout for chat service requests
    pub chat_timeout: Duration,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let content_dir = env::var("LAB_CONTENT_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let content_reload = env::var("LAB_CONTENT_RELOAD")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let chat_api_url = env::var("LAB_CHAT_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let chat_timeout = env::var("LAB_CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let bind_addr = env::var("LAB_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("LAB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("LAB_LOG_FORMAT")
            .map(|v| v.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            content_dir,
            content_reload,
            chat_api_url,
            chat_timeout,
            bind_addr,
            log_level,
            log_json,
        })
    }
}
