//! GitHub adapter.

use async_trait::async_trait;
use github_labelbot_config::Config;
use github_labelbot_ghapi_interface::{types::GhLabel, ApiService, Result};
use reqwest::Client;
use serde::Serialize;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const LABELS_PER_PAGE: &str = "100";

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait(?Send)]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/labels")))
            .query(&[("per_page", LABELS_PER_PAGE)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(response
            .json::<Vec<GhLabel>>()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()> {
        self.get_client()?
            .post(self.build_url(format!("/repos/{owner}/{name}/labels")))
            .json(label)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(
        &self,
        owner: &str,
        name: &str,
        current_name: &str,
        label: &GhLabel,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            new_name: &'a str,
            color: &'a str,
            description: Option<&'a str>,
        }

        self.get_client()?
            .patch(self.build_url(format!("/repos/{owner}/{name}/labels/{current_name}")))
            .json(&Request {
                new_name: &label.name,
                color: &label.color,
                description: label.description.as_deref(),
            })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_delete(&self, owner: &str, name: &str, label_name: &str) -> Result<()> {
        self.get_client()?
            .delete(self.build_url(format!("/repos/{owner}/{name}/labels/{label_name}")))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(())
    }
}
