use crate::domain::ports::Publisher;
use crate::domain::WebhookPayload;
use crate::error::{LeaderboardError, Result};
use reqwest::Client;
use tracing::{error, info};

/// Posts messages to a Slack incoming webhook.
pub struct SlackWebhookClient {
    client: Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(client: Client, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }
}

impl Publisher for SlackWebhookClient {
    async fn publish(&self, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Webhook error: Status {}", response.status());
            return Err(LeaderboardError::PublishFailed(response.status()));
        }

        info!("Posted leaderboard as {}", payload.username);
        Ok(())
    }
}
