use crate::domain::{DEFAULT_BASE_URL, DEFAULT_ICON, DEFAULT_USERNAME};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Id of the private leaderboard (the number at the end of its URL)
    #[arg(long, env = "AOC_LEADERBOARD_ID", default_value_t)]
    pub leaderboard_id: String,

    /// Value of the `session` cookie of a logged in Advent of Code account
    #[arg(long, env = "AOC_SESSION_ID", default_value_t, hide_env_values = true)]
    pub session_id: String,

    /// Slack incoming webhook the summary is posted to
    #[arg(long, env = "SLACK_WEBHOOK", default_value_t, hide_env_values = true)]
    pub webhook_url: String,

    /// Event year, defaults to the current year
    #[arg(long, env = "AOC_YEAR")]
    pub year: Option<i32>,

    /// Base URL of the Advent of Code service
    #[arg(long, env = "AOC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Emoji used as the avatar of the webhook post
    #[arg(long, default_value = DEFAULT_ICON)]
    pub icon: String,

    /// Display name of the webhook post
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Print the message instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
