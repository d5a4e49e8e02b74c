use crate::domain::ports::{LeaderboardSource, Publisher};
use crate::domain::{LeaderboardLocation, WebhookPayload};
use crate::error::Result;
use crate::services::presenter::format_leader_message;
use crate::services::ranking::rank;
use tracing::info;

/// Fetch, rank, format and publish, in that order.
pub struct LeaderboardService<S, P> {
    source: S,
    publisher: P,
    location: LeaderboardLocation,
    icon: String,
    username: String,
}

impl<S, P> LeaderboardService<S, P>
where
    S: LeaderboardSource,
    P: Publisher,
{
    pub fn new(
        source: S,
        publisher: P,
        location: LeaderboardLocation,
        icon: String,
        username: String,
    ) -> Self {
        Self {
            source,
            publisher,
            location,
            icon,
            username,
        }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting leaderboard report");

        // A failed fetch ends the run here, nothing gets posted.
        let leaderboard = self.source.fetch(&self.location).await?;

        let entries = rank(leaderboard.members);
        info!("Ranked {} members", entries.len());

        let message = format_leader_message(&entries, &self.location.view_url());
        let payload = WebhookPayload::new(self.icon.clone(), self.username.clone(), message);

        self.publisher.publish(&payload).await?;
        info!("Leaderboard report completed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leaderboard, MemberRecord, DEFAULT_ICON, DEFAULT_USERNAME};
    use crate::error::LeaderboardError;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    enum FakeSource {
        Board(Leaderboard),
        Failing(StatusCode),
    }

    impl LeaderboardSource for FakeSource {
        async fn fetch(&self, _location: &LeaderboardLocation) -> Result<Leaderboard> {
            match self {
                FakeSource::Board(board) => Ok(board.clone()),
                FakeSource::Failing(status) => Err(LeaderboardError::FetchFailed(*status)),
            }
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        sent: Mutex<Vec<WebhookPayload>>,
    }

    impl Publisher for &RecordingPublisher {
        async fn publish(&self, payload: &WebhookPayload) -> Result<()> {
            self.sent.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    fn location() -> LeaderboardLocation {
        LeaderboardLocation::new("https://adventofcode.com", 2023, "99")
    }

    fn service<'a>(
        source: FakeSource,
        publisher: &'a RecordingPublisher,
    ) -> LeaderboardService<FakeSource, &'a RecordingPublisher> {
        LeaderboardService::new(
            source,
            publisher,
            location(),
            DEFAULT_ICON.to_string(),
            DEFAULT_USERNAME.to_string(),
        )
    }

    fn record(name: &str, local_score: u64, stars: u64) -> MemberRecord {
        MemberRecord {
            name: Some(name.to_string()),
            local_score,
            stars,
        }
    }

    #[tokio::test]
    async fn test_publishes_ranked_message() {
        let mut board = Leaderboard::default();
        board.members.insert("1".into(), record("A", 100, 10));
        board.members.insert("2".into(), record("B", 100, 12));
        board.members.insert("3".into(), record("C", 50, 5));

        let publisher = RecordingPublisher::default();
        service(FakeSource::Board(board), &publisher)
            .run()
            .await
            .unwrap();

        let sent = publisher.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].icon, ":christmas_tree:");
        assert_eq!(sent[0].username, "Advent Of Code Leaderboard");

        let lines: Vec<&str> = sent[0].text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("B`") && lines[0].ends_with(":trophy:"));
        assert!(lines[1].contains("A`") && lines[1].ends_with(":second_place_medal:"));
        assert!(lines[2].contains("C`") && lines[2].ends_with(":third_place_medal:"));
        assert_eq!(lines[3], "");
        assert_eq!(
            lines[4],
            "<https://adventofcode.com/2023/leaderboard/private/view/99|View Leaderboard Online>"
        );
    }

    #[tokio::test]
    async fn test_empty_board_still_posts_link() {
        let publisher = RecordingPublisher::default();
        service(FakeSource::Board(Leaderboard::default()), &publisher)
            .run()
            .await
            .unwrap();

        let sent = publisher.sent.lock().unwrap();
        assert_eq!(
            sent[0].text,
            "\n<https://adventofcode.com/2023/leaderboard/private/view/99|View Leaderboard Online>"
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_publish() {
        let publisher = RecordingPublisher::default();
        let result = service(FakeSource::Failing(StatusCode::BAD_REQUEST), &publisher)
            .run()
            .await;

        assert!(matches!(
            result,
            Err(LeaderboardError::FetchFailed(status)) if status == StatusCode::BAD_REQUEST
        ));
        assert!(publisher.sent.lock().unwrap().is_empty());
    }
}
