//! Template commands.

use std::io::Write;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{
    check::TemplatesCheckCommand, install::TemplatesInstallCommand, list::TemplatesListCommand,
};
use super::{Command, CommandContext};
use crate::Result;

mod check;
mod install;
mod list;

/// Manage issue templates
#[derive(Parser)]
pub(crate) struct TemplatesCommand {
    #[clap(subcommand)]
    inner: TemplatesSubCommand,
}

#[async_trait(?Send)]
impl Command for TemplatesCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum TemplatesSubCommand {
    Check(TemplatesCheckCommand),
    Install(TemplatesInstallCommand),
    List(TemplatesListCommand),
}

#[async_trait(?Send)]
impl Command for TemplatesSubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Check(sub) => sub.execute(ctx).await,
            Self::Install(sub) => sub.execute(ctx).await,
            Self::List(sub) => sub.execute(ctx).await,
        }
    }
}
