use super::{Leaderboard, LeaderboardLocation, WebhookPayload};
use crate::error::Result;

/// Anything that can hand back the raw leaderboard for a location.
pub trait LeaderboardSource {
    async fn fetch(&self, location: &LeaderboardLocation) -> Result<Leaderboard>;
}

/// Delivery of a formatted message to a chat destination.
pub trait Publisher {
    async fn publish(&self, payload: &WebhookPayload) -> Result<()>;
}
