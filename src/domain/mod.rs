mod location;
mod member;
mod payload;
pub(crate) mod ports;

pub use location::{LeaderboardLocation, DEFAULT_BASE_URL};
pub use member::{Leaderboard, MemberRecord, RankedEntry};
pub use payload::{WebhookPayload, DEFAULT_ICON, DEFAULT_USERNAME};
