//! In-memory high-score table

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN, SCOREBOARD_CAPACITY};
use tui_snake_core::Scoreboard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Top scores, best first.
///
/// Serialized as `{"high_scores": [{"name": .., "score": ..}, ..]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    #[serde(default)]
    high_scores: Vec<ScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary entries, sorting and truncating them
    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut table = Self {
            high_scores: entries.into_iter().collect(),
        };
        table.normalize();
        table
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.high_scores
    }

    pub fn len(&self) -> usize {
        self.high_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high_scores.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.high_scores.len() >= SCOREBOARD_CAPACITY
    }

    /// Lowest score on the board, if any
    pub fn min_score(&self) -> Option<u32> {
        self.high_scores.iter().map(|e| e.score).min()
    }

    /// True when the board has room or `score` beats its lowest entry
    pub fn is_qualifying(&self, score: u32) -> bool {
        !self.is_full() || self.min_score().is_some_and(|min| score > min)
    }

    /// 0-based rank `score` would take if inserted now.
    ///
    /// Ties rank after the existing equal scores.
    pub fn rank_for(&self, score: u32) -> Option<usize> {
        let rank = self.high_scores.partition_point(|e| e.score >= score);
        (rank < SCOREBOARD_CAPACITY).then_some(rank)
    }

    /// Insert an entry, keeping the best `SCOREBOARD_CAPACITY`.
    ///
    /// Returns the entry's rank, or `None` when it did not make the board (the
    /// table is unchanged in that case).
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        let rank = self.rank_for(score)?;
        self.high_scores.insert(rank, ScoreEntry::new(name, score));
        self.high_scores.truncate(SCOREBOARD_CAPACITY);
        Some(rank)
    }

    /// Stable sort by descending score and drop anything past the capacity
    pub fn normalize(&mut self) {
        self.high_scores.sort_by(|a, b| b.score.cmp(&a.score));
        self.high_scores.truncate(SCOREBOARD_CAPACITY);
    }
}

impl Scoreboard for HighScoreTable {
    fn is_qualifying(&self, score: u32) -> bool {
        HighScoreTable::is_qualifying(self, score)
    }

    fn rank_for(&self, score: u32) -> Option<usize> {
        HighScoreTable::rank_for(self, score)
    }

    fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        HighScoreTable::insert(self, name, score)
    }
}

/// Clean a typed name for the board.
///
/// Keeps ASCII alphanumerics, at most `MAX_NAME_LEN` of them. An empty result
/// becomes the default player name.
pub fn sanitize_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect();
    if name.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> HighScoreTable {
        HighScoreTable::from_entries((1..=10).map(|i| ScoreEntry::new(format!("p{i}"), i * 100)))
    }

    #[test]
    fn test_empty_table_accepts_anything() {
        let table = HighScoreTable::new();
        assert!(table.is_qualifying(0));
        assert_eq!(table.rank_for(0), Some(0));
        assert_eq!(table.min_score(), None);
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut table = HighScoreTable::new();
        assert_eq!(table.insert("a", 30), Some(0));
        assert_eq!(table.insert("b", 50), Some(0));
        assert_eq!(table.insert("c", 40), Some(1));
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![50, 40, 30]);
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut table = HighScoreTable::new();
        table.insert("first", 100);
        assert_eq!(table.insert("second", 100), Some(1));
        assert_eq!(table.entries()[0].name, "first");
        assert_eq!(table.entries()[1].name, "second");
    }

    #[test]
    fn test_full_table_qualification() {
        let table = full_table();
        assert!(table.is_full());
        assert_eq!(table.min_score(), Some(100));
        assert!(!table.is_qualifying(100));
        assert!(!table.is_qualifying(50));
        assert!(table.is_qualifying(101));
        assert_eq!(table.rank_for(50), None);
        assert_eq!(table.rank_for(1000), Some(1));
        assert_eq!(table.rank_for(1001), Some(0));
    }

    #[test]
    fn test_low_insert_into_full_table_is_rejected() {
        let mut table = full_table();
        let before = table.clone();
        assert_eq!(table.insert("late", 5), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_high_insert_drops_lowest() {
        let mut table = full_table();
        assert_eq!(table.insert("top", 5000), Some(0));
        assert_eq!(table.len(), 10);
        assert_eq!(table.min_score(), Some(200));
    }

    #[test]
    fn test_normalize_sorts_and_truncates() {
        let mut entries: Vec<ScoreEntry> =
            (0..15).map(|i| ScoreEntry::new("x", (i * 7) % 13)).collect();
        entries.push(ScoreEntry::new("y", 99));
        let table = HighScoreTable::from_entries(entries);
        assert_eq!(table.len(), 10);
        assert_eq!(table.entries()[0].score, 99);
        assert!(table
            .entries()
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_json_shape() {
        let mut table = HighScoreTable::new();
        table.insert("ann", 120);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"high_scores":[{"name":"ann","score":120}]}"#);
        let back: HighScoreTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Ann"), "Ann");
        assert_eq!(sanitize_name("a b-c!"), "abc");
        assert_eq!(sanitize_name("abcdefghijklmnop"), "abcdefghij");
        assert_eq!(sanitize_name(""), "Player");
        assert_eq!(sanitize_name("  ?? "), "Player");
    }
}
