pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Where a private leaderboard lives for a given event year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardLocation {
    pub base_url: String,
    pub year: i32,
    pub leaderboard_id: String,
}

impl LeaderboardLocation {
    pub fn new(base_url: impl Into<String>, year: i32, leaderboard_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            year,
            leaderboard_id: leaderboard_id.into(),
        }
    }

    /// Human facing page, used as the link at the bottom of the message.
    pub fn view_url(&self) -> String {
        format!(
            "{}/{}/leaderboard/private/view/{}",
            self.base_url.trim_end_matches('/'),
            self.year,
            self.leaderboard_id
        )
    }

    pub fn json_url(&self) -> String {
        format!("{}.json", self.view_url())
    }
}
