//! High score leaderboard
//!
//! [`Leaderboard`] is the seam to whatever store keeps scores. [`HighScores`]
//! is the in-memory top-10 table; [`crate::persistence::FileLeaderboard`]
//! persists it as JSON.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Sanitized player name
    pub name: String,
    pub score: u64,
    /// Length of the run in seconds
    pub elapsed_secs: f32,
}

/// Leaderboard store failures
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("leaderboard unavailable: {0}")]
    Unavailable(String),
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("leaderboard data is corrupt: {0}")]
    Format(#[from] serde_json::Error),
}

/// Score store consulted at session start and after name entry
pub trait Leaderboard {
    /// Best `n` entries, highest score first
    fn fetch_top(&mut self, n: usize) -> Result<Vec<HighScoreEntry>, LeaderboardError>;

    /// Record a finished run
    fn save(&mut self, entry: HighScoreEntry) -> Result<(), LeaderboardError>;
}

impl<L: Leaderboard + ?Sized> Leaderboard for Box<L> {
    fn fetch_top(&mut self, n: usize) -> Result<Vec<HighScoreEntry>, LeaderboardError> {
        (**self).fetch_top(n)
    }

    fn save(&mut self, entry: HighScoreEntry) -> Result<(), LeaderboardError> {
        (**self).save(entry)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a run in score order and trim to [`MAX_HIGH_SCORES`]
    ///
    /// Every run is recorded, zero scores included. Returns the rank achieved
    /// (1-indexed), or `None` if the run fell off the end of a full table.
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        // Sorted descending by score, ties keep arrival order
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }
}

impl Leaderboard for HighScores {
    fn fetch_top(&mut self, n: usize) -> Result<Vec<HighScoreEntry>, LeaderboardError> {
        Ok(self.entries.iter().take(n).cloned().collect())
    }

    fn save(&mut self, entry: HighScoreEntry) -> Result<(), LeaderboardError> {
        match self.add_score(entry) {
            Some(rank) => log::info!("New high score at rank {}", rank),
            None => log::info!("Score did not place in the top {}", MAX_HIGH_SCORES),
        }
        Ok(())
    }
}

/// Format a run length as `m:ss`
pub fn format_elapsed(elapsed_secs: f32) -> String {
    let total = elapsed_secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u64) -> HighScoreEntry {
        HighScoreEntry {
            name: name.to_string(),
            score,
            elapsed_secs: 30.0,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry("a", 50)), Some(1));
        assert_eq!(scores.add_score(entry("b", 120)), Some(1));
        assert_eq!(scores.add_score(entry("c", 80)), Some(2));
        assert_eq!(scores.add_score(entry("d", 80)), Some(3));

        let names: Vec<_> = scores.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "d", "a"]);
    }

    #[test]
    fn test_capped_at_max() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_score(entry("p", i * 10));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries[0].score, 150);
        assert_eq!(scores.add_score(entry("top", 155)), Some(1));
        assert_eq!(scores.add_score(entry("low", 10)), None);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_zero_score_is_recorded() {
        let mut scores = HighScores::new();
        scores.save(entry("rookie", 0)).unwrap();
        let top = scores.fetch_top(MAX_HIGH_SCORES).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "rookie");
        assert_eq!(top[0].score, 0);
    }

    #[test]
    fn test_fetch_top_limits() {
        let mut scores = HighScores::new();
        for i in 1..=5 {
            scores.save(entry("p", i)).unwrap();
        }
        let top = scores.fetch_top(3).unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].score, 5);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(75.9), "1:15");
    }
}
