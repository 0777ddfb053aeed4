//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRUITSTAND_BACKEND_URL` - Base URL of the backend API
//!   (default: `http://localhost:8000`)
//! - `FRUITSTAND_SESSION_DIR` - Directory holding persisted session state
//!   (default: `$HOME/.fruitstand`, current directory fallback)

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Backend used when `FRUITSTAND_BACKEND_URL` is unset (local development).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Session directory name under `$HOME`.
const SESSION_DIR_NAME: &str = ".fruitstand";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API.
    pub backend_url: Url,
    /// Directory holding persisted session state.
    pub session_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `FRUITSTAND_BACKEND_URL` is set but does not
    /// parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_env_or_default("FRUITSTAND_BACKEND_URL", DEFAULT_BACKEND_URL);
        let backend_url = parse_backend_url(&raw)?;

        let session_dir = std::env::var_os("FRUITSTAND_SESSION_DIR")
            .map_or_else(default_session_dir, PathBuf::from);

        Ok(Self {
            backend_url,
            session_dir,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the backend base URL.
fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar("FRUITSTAND_BACKEND_URL".to_string(), e.to_string())
    })
}

/// Session directory when `FRUITSTAND_SESSION_DIR` is unset.
fn default_session_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(SESSION_DIR_NAME),
        |home| Path::new(&home).join(SESSION_DIR_NAME),
    )
}
