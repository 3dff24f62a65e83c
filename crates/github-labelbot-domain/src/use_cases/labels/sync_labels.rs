use github_labelbot_domain_models::{LabelSet, RepositoryPath};
use github_labelbot_ghapi_interface::{ApiError, ApiService};

use super::plan::{build_sync_plan, to_gh_label, SyncAction};
use crate::Result;

/// Outcome counts of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Labels created.
    pub created: usize,
    /// Labels updated in place.
    pub updated: usize,
    /// Labels deleted.
    pub deleted: usize,
    /// Declared labels already up to date.
    pub unchanged: usize,
    /// Failed operations, suppressed and logged.
    pub failed: usize,
}

pub struct SyncLabelsUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

impl<'a> SyncLabelsUseCase<'a> {
    /// Apply a label set to a repository.
    ///
    /// Every API call is individually non-fatal: a failed operation is
    /// logged, counted in the report and the run continues. With `strict`
    /// the first failure aborts instead.
    #[tracing::instrument(skip(self, set), fields(repository_path = %repository_path, strict))]
    pub async fn run(
        &self,
        repository_path: &RepositoryPath,
        set: &LabelSet,
        strict: bool,
    ) -> Result<SyncReport> {
        let (owner, name) = repository_path.components();

        let remote = match self.api_service.labels_list(owner, name).await {
            Ok(remote) => remote,
            Err(e) if strict => return Err(e.into()),
            Err(e) => {
                // Without the remote state, fall back to a blind plan: the
                // per-call suppression below absorbs the conflicts.
                tracing::warn!(
                    error = %e,
                    repository_path = %repository_path,
                    message = "Could not list remote labels, planning blind"
                );
                vec![]
            }
        };

        let plan = build_sync_plan(&remote, set);
        let planned_changes = plan
            .iter()
            .filter(|a| !matches!(a, SyncAction::Delete { .. }))
            .count();

        let mut report = SyncReport {
            unchanged: set.labels.len() - planned_changes,
            ..Default::default()
        };

        for action in &plan {
            match self.execute(owner, name, action).await {
                Ok(()) => match action {
                    SyncAction::Create { .. } => report.created += 1,
                    SyncAction::Update { .. } => report.updated += 1,
                    SyncAction::Delete { .. } => report.deleted += 1,
                },
                Err(e) if strict => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        action = %action,
                        repository_path = %repository_path,
                        message = "Label operation failed, continuing"
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    async fn execute(
        &self,
        owner: &str,
        name: &str,
        action: &SyncAction,
    ) -> std::result::Result<(), ApiError> {
        match action {
            SyncAction::Create { label } => {
                self.api_service
                    .labels_create(owner, name, &to_gh_label(label))
                    .await
            }
            SyncAction::Update {
                current_name,
                label,
            } => {
                self.api_service
                    .labels_update(owner, name, current_name, &to_gh_label(label))
                    .await
            }
            SyncAction::Delete { name: label_name } => {
                self.api_service.labels_delete(owner, name, label_name).await
            }
        }
    }
}
