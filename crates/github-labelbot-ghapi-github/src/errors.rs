use github_labelbot_ghapi_interface::ApiError;

/// GitHub driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
