//! Validation utilities.

use thiserror::Error;

use super::Config;

/// Configuration error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid default repository path.
    #[error(
        "Invalid LABELBOT_DEFAULT_REPOSITORY value: {} (expected 'owner/name')",
        path
    )]
    InvalidDefaultRepository { path: String },

    /// Invalid connect timeout.
    #[error("Invalid LABELBOT_GITHUB_API_CONNECT_TIMEOUT value: 0")]
    InvalidConnectTimeout,
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ConfigError> {
    if !config.default_repository.is_empty() && !is_valid_repository_path(&config.default_repository)
    {
        return Err(ConfigError::InvalidDefaultRepository {
            path: config.default_repository.clone(),
        });
    }

    if config.github_api_connect_timeout == 0 {
        return Err(ConfigError::InvalidConnectTimeout);
    }

    Ok(())
}

fn is_valid_repository_path(path: &str) -> bool {
    let split: Vec<_> = path.split('/').collect();
    split.len() == 2 && !split[0].is_empty() && !split[1].is_empty()
}
