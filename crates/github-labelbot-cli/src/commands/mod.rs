//! Commands.

use std::io::Write;

use async_trait::async_trait;
use clap::Subcommand;
use github_labelbot_config::Config;
use github_labelbot_ghapi_interface::ApiService;

use self::{labels::LabelsCommand, templates::TemplatesCommand};
use crate::Result;

mod labels;
mod templates;

pub(crate) struct CommandContext<W: Write> {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub writer: W,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Labels(LabelsCommand),
    Templates(TemplatesCommand),
}

#[async_trait(?Send)]
impl Command for SubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Labels(sub) => sub.execute(ctx).await,
            Self::Templates(sub) => sub.execute(ctx).await,
        }
    }
}
