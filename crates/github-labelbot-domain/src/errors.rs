//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`github_labelbot_ghapi_interface::ApiError`].
    #[error("API error")]
    ApiError {
        source: github_labelbot_ghapi_interface::ApiError,
    },

    #[error("Could not read issue template directory {}", path)]
    TemplateDirError {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not read issue template {}", path)]
    TemplateReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not write issue template {}", path)]
    TemplateWriteError {
        path: String,
        source: std::io::Error,
    },
}

impl From<github_labelbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: github_labelbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
