use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder used for members that never set a display name.
pub const UNKNOWN_MEMBER: &str = "unknown";

/// One participant as returned in the `members` object of a private
/// leaderboard. Anonymous users come back with `name: null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub local_score: u64,
    #[serde(default)]
    pub stars: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub local_score: u64,
    pub stars: u64,
}

impl From<MemberRecord> for RankedEntry {
    fn from(record: MemberRecord) -> Self {
        Self {
            name: record.name.unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
            local_score: record.local_score,
            stars: record.stars,
        }
    }
}

/// Payload of `.../leaderboard/private/view/<id>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub owner_id: Option<u64>,
    #[serde(default)]
    pub members: HashMap<String, MemberRecord>,
}
