use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain_models::RepositoryPath;

use crate::{
    commands::{Command, CommandContext},
    utils::resolve_repository,
    Result,
};

/// List labels from a repository
#[derive(Parser)]
pub(crate) struct LabelsListCommand {
    /// Repository path (e.g. `MyOrganization/my-project`)
    #[clap(short, long)]
    repository: Option<RepositoryPath>,
}

#[async_trait(?Send)]
impl Command for LabelsListCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let repository = resolve_repository(&ctx.config, self.repository)?;
        let (owner, name) = repository.components();

        let labels = ctx.api_service.labels_list(owner, name).await?;
        if labels.is_empty() {
            writeln!(ctx.writer, "No label on repository {}.", repository)?;
        } else {
            for label in labels {
                match &label.description {
                    Some(description) => writeln!(
                        ctx.writer,
                        "- {} (#{}): {}",
                        label.name, label.color, description
                    )?,
                    None => writeln!(ctx.writer, "- {} (#{})", label.name, label.color)?,
                }
            }
        }

        Ok(())
    }
}
