use crate::domain::RankedEntry;

/// Decorations for the podium, best first.
const MEDALS: [&str; 3] = [":trophy:", ":second_place_medal:", ":third_place_medal:"];

const LINK_LABEL: &str = "View Leaderboard Online";

const NAME_WIDTH: usize = 17;
const COUNT_WIDTH: usize = 3;

/// Builds the Slack message for an already ranked leaderboard.
///
/// Each member gets one line with the name padded inside a code span so
/// columns line up in a monospaced font. The message always ends with a
/// blank line and a link back to `leaderboard_url`.
pub fn format_leader_message(entries: &[RankedEntry], leaderboard_url: &str) -> String {
    let mut message = String::new();

    for (position, entry) in entries.iter().enumerate() {
        let medal = MEDALS
            .get(position)
            .map(|medal| format!(" {medal}"))
            .unwrap_or_default();

        message.push_str(&format!(
            "`{:>name_width$}` :: {:>count_width$} points, {:>count_width$} stars{}\n",
            entry.name,
            entry.local_score,
            entry.stars,
            medal,
            name_width = NAME_WIDTH,
            count_width = COUNT_WIDTH,
        ));
    }

    message.push_str(&format!("\n<{leaderboard_url}|{LINK_LABEL}>"));
    message
}
