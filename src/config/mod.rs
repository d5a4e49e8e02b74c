use crate::config::cli::Args;
use crate::domain::LeaderboardLocation;
use crate::error::{LeaderboardError, Result};
use chrono::{Datelike, Local};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub year: i32,
    pub http_client: Client,
}

impl Config {
    /// Validates the parsed arguments once, before anything touches the
    /// network. The event year is resolved here when none was given.
    pub fn from_args(args: Args) -> Result<Self> {
        Self::validate(&args)?;

        let year = args.year.unwrap_or_else(|| Local::now().year());

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        info!("Configured for leaderboard {} ({})", args.leaderboard_id, year);

        Ok(Self {
            args,
            year,
            http_client,
        })
    }

    fn validate(args: &Args) -> Result<()> {
        let mut missing = Vec::new();

        if args.leaderboard_id.trim().is_empty() {
            missing.push("--leaderboard-id (AOC_LEADERBOARD_ID)");
        }
        if args.session_id.trim().is_empty() {
            missing.push("--session-id (AOC_SESSION_ID)");
        }
        // Nothing gets posted on a dry run
        if !args.dry_run && args.webhook_url.trim().is_empty() {
            missing.push("--webhook-url (SLACK_WEBHOOK)");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LeaderboardError::ConfigurationMissing(missing))
        }
    }

    pub fn location(&self) -> LeaderboardLocation {
        LeaderboardLocation::new(
            self.args.base_url.clone(),
            self.year,
            self.args.leaderboard_id.clone(),
        )
    }
}
