use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain_models::default_label_set;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Export the default label catalog as JSON
#[derive(Parser)]
pub(crate) struct LabelsExportCommand {
    /// Output file, stdout if not precised
    #[clap(short, long)]
    output_file: Option<PathBuf>,
}

#[async_trait(?Send)]
impl Command for LabelsExportCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let set = default_label_set();

        if let Some(file_path) = self.output_file {
            let file = File::create(&file_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &set)?;
            writer.write_all(b"\n")?;
            writeln!(ctx.writer, "Label set exported to {}.", file_path.display())?;
        } else {
            serde_json::to_writer_pretty(&mut ctx.writer, &set)?;
            writeln!(ctx.writer)?;
        }

        Ok(())
    }
}
