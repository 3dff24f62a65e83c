use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain::use_cases::labels::{PlanLabelsUseCase, SyncLabelsUseCase};
use github_labelbot_domain_models::RepositoryPath;

use crate::{
    commands::{Command, CommandContext},
    utils::{load_label_set, resolve_repository},
    Result,
};

/// Apply the declared label set to a repository
#[derive(Parser)]
pub(crate) struct LabelsApplyCommand {
    /// Repository path (e.g. `MyOrganization/my-project`)
    #[clap(short, long)]
    repository: Option<RepositoryPath>,
    /// Label set file (JSON), default catalog if not precised
    #[clap(short, long)]
    file: Option<PathBuf>,
    /// Compute and print the plan without applying it
    #[clap(long)]
    dry_run: bool,
    /// Stop at the first failed API call
    #[clap(long)]
    strict: bool,
}

#[async_trait(?Send)]
impl Command for LabelsApplyCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let repository = resolve_repository(&ctx.config, self.repository)?;
        let set = load_label_set(self.file.as_deref())?;

        if self.dry_run {
            let plan = PlanLabelsUseCase {
                api_service: ctx.api_service.as_ref(),
            }
            .run(&repository, &set)
            .await?;

            if plan.is_empty() {
                writeln!(ctx.writer, "Nothing to do on repository {}.", repository)?;
            } else {
                for action in &plan {
                    writeln!(ctx.writer, "{}", action)?;
                }
                writeln!(
                    ctx.writer,
                    "{} action(s) planned on repository {}.",
                    plan.len(),
                    repository
                )?;
            }

            return Ok(());
        }

        let report = SyncLabelsUseCase {
            api_service: ctx.api_service.as_ref(),
        }
        .run(&repository, &set, self.strict)
        .await?;

        writeln!(
            ctx.writer,
            "Labels synchronized on repository {}: {} created, {} updated, {} deleted, {} unchanged, {} failed.",
            repository,
            report.created,
            report.updated,
            report.deleted,
            report.unchanged,
            report.failed
        )?;

        Ok(())
    }
}
