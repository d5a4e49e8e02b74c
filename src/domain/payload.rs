use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON: &str = ":christmas_tree:";
pub const DEFAULT_USERNAME: &str = "Advent Of Code Leaderboard";

/// Body of an incoming-webhook post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "icon_emoji")]
    pub icon: String,
    pub username: String,
    pub text: String,
}

impl WebhookPayload {
    pub fn new(icon: impl Into<String>, username: impl Into<String>, text: String) -> Self {
        Self {
            icon: icon.into(),
            username: username.into(),
            text,
        }
    }
}
