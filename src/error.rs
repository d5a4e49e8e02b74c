use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error(
        "Missing configuration: {}. Set them via flags or environment variables before running (see --help)",
        .0.join(", ")
    )]
    ConfigurationMissing(Vec<&'static str>),
    #[error("Error retrieving leaderboard: status {0}")]
    FetchFailed(StatusCode),
    #[error("Error posting leaderboard to webhook: status {0}")]
    PublishFailed(StatusCode),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
