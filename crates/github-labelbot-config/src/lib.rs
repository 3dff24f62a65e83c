//! Config module.

use std::env;

mod validation;

pub use validation::{validate_configuration, ConfigError};

/// Labelbot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default target repository path (`owner/name`).
    pub default_repository: String,
    /// GitHub API connect timeout (in milliseconds).
    pub github_api_connect_timeout: u64,
    /// GitHub API root URL.
    pub github_api_root_url: String,
    /// GitHub API personal token.
    pub github_api_token: String,
    /// Use bunyan logging.
    pub logging_use_bunyan: bool,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env() -> Config {
        Config {
            default_repository: env_to_str("LABELBOT_DEFAULT_REPOSITORY", ""),
            github_api_connect_timeout: env_to_u64("LABELBOT_GITHUB_API_CONNECT_TIMEOUT", 5000),
            github_api_root_url: env_to_str(
                "LABELBOT_GITHUB_API_ROOT_URL",
                "https://api.github.com",
            ),
            github_api_token: env_to_str("LABELBOT_GITHUB_API_TOKEN", ""),
            logging_use_bunyan: env_to_bool("LABELBOT_LOGGING_USE_BUNYAN", false),
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
