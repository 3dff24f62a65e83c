use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain::use_cases::templates::{CheckTemplatesUseCase, TEMPLATE_SUBDIR};

use crate::{
    commands::{Command, CommandContext},
    utils::load_label_set,
    Result,
};

/// Check issue templates in a directory
#[derive(Parser)]
pub(crate) struct TemplatesCheckCommand {
    /// Template directory, `.github/ISSUE_TEMPLATE` if not precised
    #[clap(short, long)]
    dir: Option<PathBuf>,
    /// Label set file (JSON) for cross-checking, default catalog if not precised
    #[clap(short, long)]
    file: Option<PathBuf>,
}

#[async_trait(?Send)]
impl Command for TemplatesCheckCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let set = load_label_set(self.file.as_deref())?;
        let dir = self.dir.unwrap_or_else(|| PathBuf::from(TEMPLATE_SUBDIR));

        let checks = CheckTemplatesUseCase { label_set: &set }.run(&dir)?;
        if checks.is_empty() {
            writeln!(ctx.writer, "No template found in {}.", dir.display())?;
            return Ok(());
        }

        let mut invalid = 0;
        for check in &checks {
            if check.is_valid() {
                writeln!(ctx.writer, "{}: OK", check.file_name)?;
            } else {
                invalid += 1;
                writeln!(ctx.writer, "{}:", check.file_name)?;
                for problem in &check.problems {
                    writeln!(ctx.writer, "  - {}", problem)?;
                }
            }
        }

        if invalid > 0 {
            anyhow::bail!("{} invalid template(s) in {}", invalid, dir.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use github_labelbot_domain::builtin_template_content;
    use github_labelbot_domain_models::TemplateKind;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_failure, CommandContextTest};

    #[tokio::test]
    async fn check_accepts_the_builtin_templates() {
        let dir = tempfile::tempdir().unwrap();
        for kind in TemplateKind::ALL {
            fs::write(
                dir.path().join(kind.file_name()),
                builtin_template_content(kind),
            )
            .unwrap();
        }

        let ctx = CommandContextTest::new();
        let output = test_command(
            ctx,
            &[
                "templates",
                "check",
                "--dir",
                &dir.path().to_string_lossy(),
            ],
        )
        .await;

        assert_eq!(output, "bug_report.md: OK\nfeature_request.md: OK\n");
    }

    #[tokio::test]
    async fn check_reports_problems_and_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bug_report.md"),
            "---\nname: Bug report\nabout: Report something broken\nlabels:\n  - nope\n---\nNo headings here.\n",
        )
        .unwrap();

        let ctx = CommandContextTest::new();
        let (output, error) = test_command_failure(
            ctx,
            &[
                "templates",
                "check",
                "--dir",
                &dir.path().to_string_lossy(),
            ],
        )
        .await;

        assert!(output.contains("bug_report.md:\n"));
        assert!(output.contains("  - Missing section heading: ## Describe the bug\n"));
        assert!(output.contains("  - Unknown default label: nope\n"));
        assert!(error.contains("1 invalid template(s)"));
    }

    #[tokio::test]
    async fn check_reports_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let ctx = CommandContextTest::new();
        let output = test_command(
            ctx,
            &[
                "templates",
                "check",
                "--dir",
                &dir.path().to_string_lossy(),
            ],
        )
        .await;

        assert!(output.starts_with("No template found in "));
    }
}
