//! File-backed leaderboard
//!
//! The table is a single JSON document rewritten on every save. A missing
//! file is an empty leaderboard; an unreadable one is reported as an error
//! so the caller can show the list as unavailable.

use std::path::PathBuf;

use crate::highscores::{HighScoreEntry, HighScores, Leaderboard, LeaderboardError};

/// [`HighScores`] persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileLeaderboard {
    path: PathBuf,
    scores: Option<HighScores>,
}

impl FileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: None,
        }
    }

    fn read(&self) -> Result<HighScores, LeaderboardError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => {
                let scores: HighScores = serde_json::from_str(&json)?;
                log::info!("Loaded {} high scores", scores.entries.len());
                Ok(scores)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Ok(HighScores::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn loaded(&mut self) -> Result<&mut HighScores, LeaderboardError> {
        if self.scores.is_none() {
            self.scores = Some(self.read()?);
        }
        self.scores
            .as_mut()
            .ok_or_else(|| LeaderboardError::Unavailable("scores not loaded".to_string()))
    }

    fn write(&self, scores: &HighScores) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string_pretty(scores)?;
        std::fs::write(&self.path, json)?;
        log::info!("High scores saved ({} entries)", scores.entries.len());
        Ok(())
    }
}

impl Leaderboard for FileLeaderboard {
    fn fetch_top(&mut self, n: usize) -> Result<Vec<HighScoreEntry>, LeaderboardError> {
        self.loaded()?.fetch_top(n)
    }

    fn save(&mut self, entry: HighScoreEntry) -> Result<(), LeaderboardError> {
        let mut scores = self.loaded()?.clone();
        scores.save(entry)?;
        self.write(&scores)?;
        self.scores = Some(scores);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("astro-blaster-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let mut board = FileLeaderboard::new(temp_path("missing"));
        assert!(board.fetch_top(10).unwrap().is_empty());
    }

    #[test]
    fn test_save_round_trips_through_disk() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut board = FileLeaderboard::new(&path);
        board
            .save(HighScoreEntry {
                name: "ACE".to_string(),
                score: 340,
                elapsed_secs: 61.5,
            })
            .unwrap();

        let mut reopened = FileLeaderboard::new(&path);
        let top = reopened.fetch_top(5).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "ACE");
        assert_eq!(top[0].score, 340);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ nope").unwrap();

        let mut board = FileLeaderboard::new(&path);
        assert!(matches!(board.fetch_top(10), Err(LeaderboardError::Format(_))));

        let _ = std::fs::remove_file(&path);
    }
}
