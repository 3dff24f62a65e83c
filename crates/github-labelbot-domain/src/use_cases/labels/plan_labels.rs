use github_labelbot_domain_models::{LabelSet, RepositoryPath};
use github_labelbot_ghapi_interface::ApiService;

use super::plan::{build_sync_plan, SyncAction};
use crate::Result;

pub struct PlanLabelsUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

impl<'a> PlanLabelsUseCase<'a> {
    /// Compute the sync plan for a repository, without applying anything.
    #[tracing::instrument(skip(self, set), fields(repository_path = %repository_path))]
    pub async fn run(
        &self,
        repository_path: &RepositoryPath,
        set: &LabelSet,
    ) -> Result<Vec<SyncAction>> {
        let (owner, name) = repository_path.components();
        let remote = self.api_service.labels_list(owner, name).await?;

        Ok(build_sync_plan(&remote, set))
    }
}
