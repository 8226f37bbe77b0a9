//! High score leaderboard
//!
//! Top 10 scores, persisted as plain text: one ASCII integer per line,
//! descending. The parse is strict - a single malformed line fails the
//! whole load rather than being skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file line {line}: {content:?} is not a valid score")]
    Corrupt { line: usize, content: String },
    #[error("high score i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// High score leaderboard, always sorted descending, never longer than
/// [`MAX_HIGH_SCORES`]. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: Vec<u64>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Would this score make the board?
    pub fn qualifies(&self, score: u64) -> bool {
        self.entries.len() < MAX_HIGH_SCORES || self.entries.last().is_some_and(|&low| score > low)
    }

    /// Insert a score, keeping the list sorted descending and trimmed.
    pub fn insert(&mut self, score: u64) {
        self.entries.push(score);
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Load the leaderboard from `path`. A missing file is the first-boot
    /// case: an empty file is created and an empty list returned, so a
    /// second load is indistinguishable from the first.
    pub fn load(path: &Path) -> Result<Self, HighScoreError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::write(path, "")?;
                log::info!("no high score file, created {}", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let score = line.parse::<u64>().map_err(|_| HighScoreError::Corrupt {
                line: idx + 1,
                content: line.to_string(),
            })?;
            entries.push(score);
        }

        log::info!("loaded {} high scores", entries.len());
        Ok(Self { entries })
    }

    /// Write the leaderboard to `path`, one score per line, descending.
    pub fn save(&self, path: &Path) -> Result<(), HighScoreError> {
        let mut text = String::new();
        for score in &self.entries {
            text.push_str(&score.to_string());
            text.push('\n');
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// Insert a score and persist the list. On a write failure the score
    /// stays on the in-memory list and the error is returned.
    pub fn record(&mut self, score: u64, path: &Path) -> Result<(), HighScoreError> {
        self.insert(score);
        self.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut scores = HighScores::new();
        for s in [300, 1200, 700, 700, 100] {
            scores.insert(s);
        }
        assert_eq!(scores.entries(), &[1200, 700, 700, 300, 100]);
        assert_eq!(scores.top_score(), Some(1200));
    }

    #[test]
    fn test_insert_eleven_increasing_drops_smallest() {
        let mut scores = HighScores::new();
        for s in 1..=11u64 {
            scores.insert(s * 100);
        }
        assert_eq!(
            scores.entries(),
            &[1100, 1000, 900, 800, 700, 600, 500, 400, 300, 200]
        );
    }

    #[test]
    fn test_qualifies() {
        let mut scores = HighScores::new();
        assert!(scores.qualifies(0));
        for s in 1..=10u64 {
            scores.insert(s * 100);
        }
        assert!(!scores.qualifies(100));
        assert!(scores.qualifies(150));
    }

    #[test]
    fn test_load_missing_file_bootstraps_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");

        let scores = HighScores::load(&path).unwrap();
        assert!(scores.is_empty());
        // The empty file now exists; loading again behaves the same
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        assert!(HighScores::load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");

        let mut scores = HighScores::new();
        for s in [500, 2500, 1500] {
            scores.insert(s);
        }
        scores.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2500\n1500\n500\n");
        assert_eq!(HighScores::load(&path).unwrap(), scores);
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        std::fs::write(&path, "1200\noops\n300\n").unwrap();

        let err = HighScores::load(&path).unwrap_err();
        assert!(matches!(
            err,
            HighScoreError::Corrupt { line: 2, ref content } if content == "oops"
        ));
    }

    #[test]
    fn test_load_rejects_negative_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        std::fs::write(&path, "-5\n").unwrap();
        assert!(matches!(
            HighScores::load(&path),
            Err(HighScoreError::Corrupt { line: 1, .. })
        ));
    }

    #[test]
    fn test_record_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");

        let mut scores = HighScores::load(&path).unwrap();
        scores.record(800, &path).unwrap();
        scores.record(1600, &path).unwrap();

        assert_eq!(HighScores::load(&path).unwrap().entries(), &[1600, 800]);
    }

    proptest! {
        #[test]
        fn prop_sorted_and_capped(inserts in prop::collection::vec(any::<u64>(), 0..50)) {
            let mut scores = HighScores::new();
            for s in inserts {
                scores.insert(s);
                prop_assert!(scores.entries().len() <= MAX_HIGH_SCORES);
                prop_assert!(scores.entries().windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
