use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain::use_cases::labels::PlanLabelsUseCase;
use github_labelbot_domain_models::RepositoryPath;

use crate::{
    commands::{Command, CommandContext},
    utils::{load_label_set, resolve_repository},
    Result,
};

/// Show the sync plan for a repository
#[derive(Parser)]
pub(crate) struct LabelsPlanCommand {
    /// Repository path (e.g. `MyOrganization/my-project`)
    #[clap(short, long)]
    repository: Option<RepositoryPath>,
    /// Label set file (JSON), default catalog if not precised
    #[clap(short, long)]
    file: Option<PathBuf>,
}

#[async_trait(?Send)]
impl Command for LabelsPlanCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let repository = resolve_repository(&ctx.config, self.repository)?;
        let set = load_label_set(self.file.as_deref())?;

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

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use github_labelbot_domain_models::default_label_set;
    use github_labelbot_ghapi_interface::types::GhLabel;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn plan_reports_a_converged_repository() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service.expect_labels_list().once().return_once(|_, _| {
            Ok(default_label_set()
                .labels
                .iter()
                .map(|l| GhLabel {
                    name: l.name.clone(),
                    color: l.color.as_str().into(),
                    description: l.description.clone(),
                })
                .collect())
        });

        let output = test_command(ctx, &["labels", "plan", "--repository", "owner/name"]).await;
        assert_eq!(output, "Nothing to do on repository owner/name.\n");
    }

    #[tokio::test]
    async fn plan_lists_pending_actions() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service.expect_labels_list().once().return_once(|_, _| {
            Ok(vec![GhLabel {
                name: "enhancement".into(),
                color: "a2eeef".into(),
                description: None,
            }])
        });

        let output = test_command(ctx, &["labels", "plan", "--repository", "owner/name"]).await;
        assert!(output.starts_with("- delete enhancement\n"));
        assert!(output.ends_with("18 action(s) planned on repository owner/name.\n"));
    }
}
