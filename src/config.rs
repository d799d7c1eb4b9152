//! Settings loaded from the process environment and an optional dotenv file.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const TOKEN_VAR: &str = "TRELLO_TOKEN";
pub const BASE_URL_VAR: &str = "TRELLO_BASE_URL";
pub const TIMEOUT_VAR: &str = "TRELLO_TIMEOUT_SECS";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Missing required setting {var}")]
    #[diagnostic(
        code(trello_mcp::config::missing),
        help("Set {var} in the environment or in a .env file. Keys and tokens are issued at https://trello.com/power-ups/admin")
    )]
    Missing { var: &'static str },

    #[error("Invalid value for {var}: {message}")]
    #[diagnostic(code(trello_mcp::config::invalid))]
    Invalid { var: &'static str, message: String },

    #[error("Failed to read env file {path}: {message}")]
    #[diagnostic(code(trello_mcp::config::env_file))]
    EnvFile { path: PathBuf, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Trello connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

// Credentials stay out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load settings from the process environment, falling back to a dotenv
    /// file.
    ///
    /// Priority for each variable:
    /// 1. Process environment
    /// 2. `env_file` when given (must be readable), else `./.env` if present
    /// 3. Built-in default (optional settings only)
    pub fn load(env_file: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(env_file, |key| env::var(key).ok())
    }

    /// [`Settings::load`] with the process environment replaced by `process`.
    pub fn load_with<F>(env_file: Option<&Path>, process: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => {
                let default = Path::new(".env");
                if default.is_file() {
                    read_env_file(default)?
                } else {
                    HashMap::new()
                }
            }
        };

        Self::from_lookup(|key| process(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::Missing { var: API_KEY_VAR })?;
        let token = non_blank(TOKEN_VAR).ok_or(ConfigError::Missing { var: TOKEN_VAR })?;

        let mut settings = Settings::new(api_key.trim(), token.trim());

        if let Some(base_url) = non_blank(BASE_URL_VAR) {
            let base_url = base_url.trim();
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    var: BASE_URL_VAR,
                    message: format!("'{}' is not an http(s) URL", base_url),
                });
            }
            settings = settings.with_base_url(base_url);
        }

        if let Some(timeout) = non_blank(TIMEOUT_VAR) {
            let secs: u64 = timeout.trim().parse().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                message: format!("'{}' is not a whole number of seconds", timeout),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    message: "timeout must be at least one second".to_string(),
                });
            }
            settings = settings.with_timeout(Duration::from_secs(secs));
        }

        debug!(?settings, "Loaded settings");
        Ok(settings)
    }
}

/// Parse a dotenv file without touching the process environment.
fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let env_file_error = |message: String| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message,
    };

    dotenv::from_path_iter(path)
        .map_err(|e| env_file_error(e.to_string()))?
        .map(|item| item.map_err(|e| env_file_error(e.to_string())))
        .collect()
}
