//! Auth.

use std::time::Duration;

use github_labelbot_config::Config;
use reqwest::{
    header::{self, HeaderMap},
    ClientBuilder,
};

use crate::errors::GitHubError;

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config);

    let mut headers = base_headers();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", config.github_api_token))
            .map_err(|e| GitHubError::ImplementationError { source: e.into() })?,
    );

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.github_api_connect_timeout))
        .user_agent(format!("github-labelbot/{APP_VERSION}"))
        .default_headers(base_headers())
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.github_api_root_url, path.into())
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github.v3+json"),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_env();
        config.github_api_root_url = "https://api.github.com".into();
        config.github_api_connect_timeout = 5000;
        config.github_api_token = "abcdef".into();
        config
    }

    #[test]
    fn test_build_github_url() {
        let config = arrange_config();
        assert_eq!(
            build_github_url(&config, "/repos/owner/name/labels"),
            "https://api.github.com/repos/owner/name/labels"
        );
    }

    #[test]
    fn test_get_authenticated_client_builder() {
        let config = arrange_config();

        get_authenticated_client_builder(&config)
            .unwrap()
            .build()
            .unwrap();
    }

    #[test]
    fn test_get_authenticated_client_builder_rejects_invalid_token() {
        let mut config = arrange_config();
        config.github_api_token = "bad\ntoken".into();

        assert!(get_authenticated_client_builder(&config).is_err());
    }
}
