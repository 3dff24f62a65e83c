//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Label operation error.
    #[error(
        "Could not {} label {} on repository {}",
        operation,
        label,
        repository_path
    )]
    LabelOperationError {
        operation: String,
        label: String,
        repository_path: String,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
