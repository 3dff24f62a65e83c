use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use github_labelbot_domain::builtin_template;
use github_labelbot_domain_models::TemplateKind;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List the built-in issue templates
#[derive(Parser)]
pub(crate) struct TemplatesListCommand;

#[async_trait(?Send)]
impl Command for TemplatesListCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        for kind in TemplateKind::ALL {
            let template = builtin_template(kind)?;
            writeln!(
                ctx.writer,
                "- {} ({}): {}",
                kind.file_name(),
                template.front_matter.name,
                template.front_matter.about
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn list_prints_the_builtin_templates() {
        let ctx = CommandContextTest::new();

        let output = test_command(ctx, &["templates", "list"]).await;
        assert_eq!(
            output,
            "- bug_report.md (Bug report): Report something broken\n- feature_request.md (Feature request): Suggest an improvement or new capability\n"
        );
    }
}
