//! High-score ranking.
//!
//! Scores are cards left in the deck when the game ended, so lower ranks
//! higher. The board keeps the best `capacity` entries. Where the list is
//! stored is up to the host; this module only ranks and encodes it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{GameConfig, DEFAULT_LEADERBOARD_CAPACITY};
use crate::core::error::GameError;

/// Name shown for entries saved without one.
pub const ANONYMOUS: &str = "Anonymous";

/// One finished game on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: usize,
    pub date: String,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: usize, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.into(),
        }
    }

    /// Name for display, falling back to "Anonymous".
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            ANONYMOUS
        } else {
            &self.name
        }
    }
}

/// Top-N list sorted ascending by score.
///
/// ```
/// use hilo_grid::leaderboard::{Leaderboard, ScoreEntry};
///
/// let mut board = Leaderboard::new(3);
/// board.insert(ScoreEntry::new("ana", 12, "2024-05-01"));
/// board.insert(ScoreEntry::new("bo", 4, "2024-05-02"));
///
/// assert_eq!(board.best().unwrap().name, "bo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_CAPACITY)
    }
}

impl Leaderboard {
    /// Empty board. A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Empty board sized by the config's leaderboard capacity.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.leaderboard_capacity)
    }

    /// Build from stored entries, sorting and truncating them.
    #[must_use]
    pub fn from_entries(mut entries: Vec<ScoreEntry>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.sort_by_key(|e| e.score);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Whether `score` would make it onto the board.
    #[must_use]
    pub fn qualifies(&self, score: usize) -> bool {
        match self.entries.last() {
            Some(worst) if self.is_full() => score < worst.score,
            _ => true,
        }
    }

    /// Insert an entry in rank order and trim the board.
    ///
    /// Equal scores keep their arrival order. Returns the new entry's rank
    /// index, or `None` if it did not make the cut.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let index = self.entries.partition_point(|e| e.score <= entry.score);
        if index >= self.capacity {
            debug!(score = entry.score, "score did not qualify");
            return None;
        }

        self.entries.insert(index, entry);
        self.entries.truncate(self.capacity);
        debug!(rank = index + 1, "score recorded");
        Some(index)
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<ScoreEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Encode the entries as a JSON array.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(&self.entries).map_err(|e| GameError::Leaderboard(e.to_string()))
    }

    /// Decode a JSON array of entries, normalizing order and length.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, GameError> {
        let entries: Vec<ScoreEntry> =
            serde_json::from_str(json).map_err(|e| GameError::Leaderboard(e.to_string()))?;
        Ok(Self::from_entries(entries, capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: usize) -> ScoreEntry {
        ScoreEntry::new(name, score, "2024-01-01")
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut board = Leaderboard::new(10);
        board.insert(entry("a", 20));
        board.insert(entry("b", 3));
        board.insert(entry("c", 11));

        let scores: Vec<_> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3, 11, 20]);
    }

    #[test]
    fn test_equal_scores_keep_arrival_order() {
        let mut board = Leaderboard::new(10);
        board.insert(entry("first", 5));
        assert_eq!(board.insert(entry("second", 5)), Some(1));
        assert_eq!(board.entries()[0].name, "first");
    }

    #[test]
    fn test_truncates_to_capacity() {
        let mut board = Leaderboard::new(3);
        for score in [9, 8, 7, 6] {
            board.insert(entry("x", score));
        }

        let scores: Vec<_> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![6, 7, 8]);
        assert_eq!(board.insert(entry("late", 30)), None);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_qualifies() {
        let mut board = Leaderboard::new(2);
        assert!(board.qualifies(40));

        board.insert(entry("a", 10));
        board.insert(entry("b", 20));
        assert!(board.qualifies(19));
        assert!(!board.qualifies(20));
        assert!(!board.qualifies(25));
    }

    #[test]
    fn test_from_config_capacity() {
        let board = Leaderboard::from_config(&GameConfig::new().with_leaderboard_capacity(4));
        assert_eq!(board.capacity(), 4);
        assert_eq!(Leaderboard::from_config(&GameConfig::default()), Leaderboard::default());
    }

    #[test]
    fn test_remove() {
        let mut board = Leaderboard::new(5);
        board.insert(entry("a", 1));
        board.insert(entry("b", 2));

        assert_eq!(board.remove(0).map(|e| e.name), Some("a".to_string()));
        assert_eq!(board.remove(4), None);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(entry("", 1).display_name(), ANONYMOUS);
        assert_eq!(entry("  ", 1).display_name(), ANONYMOUS);
        assert_eq!(entry("zed", 1).display_name(), "zed");
    }

    #[test]
    fn test_json_normalizes() {
        let json = r#"[
            {"name":"c","score":30,"date":"d"},
            {"name":"a","score":1,"date":"d"},
            {"name":"b","score":2,"date":"d"}
        ]"#;
        let board = Leaderboard::from_json(json, 2).unwrap();

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let reloaded = Leaderboard::from_json(&board.to_json().unwrap(), 2).unwrap();
        assert_eq!(reloaded, board);
    }

    #[test]
    fn test_json_malformed() {
        assert!(matches!(
            Leaderboard::from_json("not json", 10),
            Err(GameError::Leaderboard(_))
        ));
    }
}
