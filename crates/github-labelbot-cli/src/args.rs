use github_labelbot_config::Config;
use github_labelbot_ghapi_github::GithubApiService;
use github_labelbot_ghapi_interface::ApiService;
use github_labelbot_ghapi_null::NullApiService;
use std::io::Write;

use clap::Parser;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// GitHub issue tracker provisioning tool
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "github-labelbot")]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async {
            let api_service = Self::api_service_from_config(&config);
            let ctx = CommandContext {
                config,
                api_service,
                writer: Box::new(std::io::stdout()),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))?;

        Ok(())
    }

    fn api_service_from_config(config: &Config) -> Box<dyn ApiService> {
        if config.github_api_token.is_empty() {
            tracing::warn!("No GitHub API token configured, using the null API driver");
            Box::new(NullApiService::new())
        } else {
            Box::new(GithubApiService::new(config.clone()))
        }
    }

    pub(crate) async fn parse_args_async<W: Write>(
        args: Args,
        ctx: CommandContext<W>,
    ) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
