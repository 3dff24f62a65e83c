use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain::use_cases::templates::InstallTemplatesUseCase;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Install the built-in issue templates into a working copy
#[derive(Parser)]
pub(crate) struct TemplatesInstallCommand {
    /// Working copy root, current directory if not precised
    #[clap(short, long)]
    dir: Option<PathBuf>,
    /// Overwrite existing templates
    #[clap(long)]
    force: bool,
}

#[async_trait(?Send)]
impl Command for TemplatesInstallCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let root = self.dir.unwrap_or_else(|| PathBuf::from("."));

        let report = InstallTemplatesUseCase.run(&root, self.force)?;
        for path in &report.written {
            writeln!(ctx.writer, "Wrote {}.", path.display())?;
        }
        for path in &report.skipped {
            writeln!(ctx.writer, "Skipped {} (already exists).", path.display())?;
        }

        Ok(())
    }
}
