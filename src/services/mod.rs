pub(crate) mod leaderboard_service;
pub(crate) mod presenter;
pub(crate) mod ranking;

pub use leaderboard_service::LeaderboardService;
