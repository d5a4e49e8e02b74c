use crate::domain::ports::LeaderboardSource;
use crate::domain::{Leaderboard, LeaderboardLocation};
use crate::error::{LeaderboardError, Result};
use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::{debug, error, info};

pub struct AdventOfCodeClient {
    client: Client,
    session_id: String,
}

impl AdventOfCodeClient {
    pub fn new(client: Client, session_id: String) -> Self {
        Self { client, session_id }
    }

    fn session_cookie(&self) -> String {
        format!("session={}", self.session_id)
    }
}

impl LeaderboardSource for AdventOfCodeClient {
    async fn fetch(&self, location: &LeaderboardLocation) -> Result<Leaderboard> {
        let url = location.json_url();
        debug!("Fetching leaderboard from {}", url);

        let response = self
            .client
            .get(&url)
            .header(COOKIE, self.session_cookie())
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Advent of Code API error: Status {}", response.status());
            return Err(LeaderboardError::FetchFailed(response.status()));
        }

        let leaderboard: Leaderboard = response.json().await?;
        info!(
            "Fetched leaderboard {} for {} with {} members",
            location.leaderboard_id,
            leaderboard.event.as_deref().unwrap_or("unknown event"),
            leaderboard.members.len()
        );
        debug!("Leaderboard owner: {:?}", leaderboard.owner_id);

        Ok(leaderboard)
    }
}
