use crate::config::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{AdventOfCodeClient, ConsolePublisher, SlackWebhookClient};
use crate::services::LeaderboardService;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    let location = config.location();
    let args = &config.args;

    let source = AdventOfCodeClient::new(config.http_client.clone(), args.session_id.clone());

    if args.dry_run {
        LeaderboardService::new(
            source,
            ConsolePublisher::stdout(),
            location,
            args.icon.clone(),
            args.username.clone(),
        )
        .run()
        .await
    } else {
        let publisher =
            SlackWebhookClient::new(config.http_client.clone(), args.webhook_url.clone());
        LeaderboardService::new(
            source,
            publisher,
            location,
            args.icon.clone(),
            args.username.clone(),
        )
        .run()
        .await
    }
}
