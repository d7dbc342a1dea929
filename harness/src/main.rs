//! posts-harness: run the posts-API checks.

use anyhow::Context;
use clap::{Parser, Subcommand};
use posts_core::{Config, PostsApi};
use posts_harness::{logging, mock, run_direct, ExternalRunner};
use tracing::{dispatcher, info};

#[derive(Parser, Debug)]
#[command(name = "posts-harness", version, about = "Checks a posts REST service")]
struct Args {
    /// Base URL of the service (overrides POSTS_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Debug logging for the client and the suite.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call every check in order, in this process.
    Direct,
    /// Run the live test target through `cargo test`.
    External,
    /// Start the bundled mock service and run the checks against it.
    Mock,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::from_env()
        .context("loading configuration")?
        .with_base_url(args.base_url);
    config.validate()?;

    let logger = logging::dispatch(&config.log, args.verbose);

    dispatcher::with_default(&logger, || -> anyhow::Result<()> {
        match args.command {
            Command::Direct => {
                let api = PostsApi::from_config(&config, logger.clone());
                run_direct(&api);
            }
            Command::External => {
                ExternalRunner::for_config(&config).run()?;
            }
            Command::Mock => {
                let addr = mock::spawn_mock_server().context("starting mock server")?;
                info!(%addr, "mock service started");
                let api = PostsApi::new(&format!("http://{addr}"), logger.clone());
                run_direct(&api);
            }
        }
        Ok(())
    })
}
