use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    utils::load_label_set,
    Result,
};

/// Validate a label set
#[derive(Parser)]
pub(crate) struct LabelsCheckCommand {
    /// Label set file (JSON), default catalog if not precised
    #[clap(short, long)]
    file: Option<PathBuf>,
}

#[async_trait(?Send)]
impl Command for LabelsCheckCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let set = load_label_set(self.file.as_deref())?;

        writeln!(
            ctx.writer,
            "Label set is valid: {} label(s), {} deletion(s).",
            set.labels.len(),
            set.delete.len()
        )?;

        Ok(())
    }
}
