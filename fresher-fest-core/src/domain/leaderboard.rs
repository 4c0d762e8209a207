use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exercises offered by the fitness challenge screen
pub const FITNESS_EXERCISES: &[&str] = &["Push-ups", "Squats", "Sit-ups"];

/// One submitted score. Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// In-memory ranked score lists, grouped by board (an exercise or an
/// activity label).
///
/// Lives for the browser session only; there is no persistence and no
/// deletion. Pass it explicitly into the screens that need it rather than
/// holding it as a global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Leaderboard {
    boards: HashMap<String, Vec<ScoreEntry>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score and re-rank the board.
    ///
    /// Descending by score; the sort is stable, so equal scores keep their
    /// submission order.
    pub fn submit(&mut self, board: &str, name: impl Into<String>, score: u32) {
        let entries = self.boards.entry(board.to_string()).or_default();
        entries.push(ScoreEntry {
            name: name.into(),
            score,
        });
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.score));
        tracing::debug!(board, entries = entries.len(), "score submitted");
    }

    /// Entries in rank order (best first). Empty slice for unknown boards.
    pub fn ranked(&self, board: &str) -> &[ScoreEntry] {
        self.boards.get(board).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, board: &str) -> bool {
        self.ranked(board).is_empty()
    }

    /// Rank (1-based) of the best entry with this name, if any
    pub fn rank_of(&self, board: &str, name: &str) -> Option<usize> {
        self.ranked(board)
            .iter()
            .position(|entry| entry.name == name)
            .map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let mut leaderboard = Leaderboard::new();
        leaderboard.submit("Push-ups", "Ann", 10);
        leaderboard.submit("Push-ups", "Bo", 15);
        leaderboard.submit("Push-ups", "Cid", 15);

        let names: Vec<&str> = leaderboard
            .ranked("Push-ups")
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bo", "Cid", "Ann"]);
    }

    #[test]
    fn test_boards_are_independent() {
        let mut leaderboard = Leaderboard::new();
        leaderboard.submit("Push-ups", "Ann", 30);
        leaderboard.submit("Squats", "Ann", 45);

        assert_eq!(leaderboard.ranked("Push-ups").len(), 1);
        assert_eq!(leaderboard.ranked("Squats").len(), 1);
        assert!(leaderboard.is_empty("Sit-ups"));
    }

    #[test]
    fn test_rank_of() {
        let mut leaderboard = Leaderboard::new();
        leaderboard.submit("Squats", "Ann", 10);
        leaderboard.submit("Squats", "Bo", 20);

        assert_eq!(leaderboard.rank_of("Squats", "Bo"), Some(1));
        assert_eq!(leaderboard.rank_of("Squats", "Ann"), Some(2));
        assert_eq!(leaderboard.rank_of("Squats", "Cid"), None);
    }

    #[test]
    fn test_unknown_board_is_empty() {
        let leaderboard = Leaderboard::new();
        assert!(leaderboard.ranked("Burpees").is_empty());
    }
}
