use std::io::Write;

use clap::Parser;
use github_labelbot_config::Config;
use github_labelbot_ghapi_interface::MockApiService;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env();
        config.default_repository = String::new();

        Self {
            config,
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context<W: Write>(self, writer: W) -> CommandContext<W> {
        CommandContext {
            config: self.config,
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (output, result) = run_command(ctx, command_args).await;
    result.unwrap();
    output
}

pub(crate) async fn test_command_failure(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (String, String) {
    let (output, result) = run_command(ctx, command_args).await;
    (output, format!("{:#}", result.unwrap_err()))
}

async fn run_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (String, crate::Result<()>) {
    let mut buf = Vec::new();

    let result = {
        let command_args = {
            let mut tmp_args = vec!["github-labelbot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        match Args::try_parse_from(command_args) {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(&mut buf)).await,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    (
        std::str::from_utf8(buf.as_slice()).unwrap().to_string(),
        result,
    )
}
