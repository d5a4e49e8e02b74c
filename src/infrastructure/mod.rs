mod clients;
mod console;

pub use clients::{advent_of_code::AdventOfCodeClient, slack::SlackWebhookClient};
pub use console::ConsolePublisher;
