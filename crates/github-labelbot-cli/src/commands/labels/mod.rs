//! Label commands.

use std::io::Write;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{
    apply::LabelsApplyCommand, check::LabelsCheckCommand, export::LabelsExportCommand,
    list::LabelsListCommand, plan::LabelsPlanCommand,
};
use super::{Command, CommandContext};
use crate::Result;

mod apply;
mod check;
mod export;
mod list;
mod plan;

/// Manage repository labels
#[derive(Parser)]
pub(crate) struct LabelsCommand {
    #[clap(subcommand)]
    inner: LabelsSubCommand,
}

#[async_trait(?Send)]
impl Command for LabelsCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum LabelsSubCommand {
    Apply(LabelsApplyCommand),
    Plan(LabelsPlanCommand),
    List(LabelsListCommand),
    Check(LabelsCheckCommand),
    Export(LabelsExportCommand),
}

#[async_trait(?Send)]
impl Command for LabelsSubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Apply(sub) => sub.execute(ctx).await,
            Self::Plan(sub) => sub.execute(ctx).await,
            Self::List(sub) => sub.execute(ctx).await,
            Self::Check(sub) => sub.execute(ctx).await,
            Self::Export(sub) => sub.execute(ctx).await,
        }
    }
}
