//! Best score per game
//!
//! Read once at startup, written only when a finished game beats it.

use std::io;
use std::path::{Path, PathBuf};

use crate::persistence::{read_high_score, write_high_score};

/// High score backed by a single-integer file
#[derive(Debug, Clone)]
pub struct HighScore {
    path: PathBuf,
    best: u64,
}

impl HighScore {
    /// Load from `path`; missing or malformed files start at 0
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_high_score(&path);
        Self { path, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store `score` if it beats the current best.
    /// Returns whether the file was rewritten.
    pub fn record(&mut self, score: u64) -> io::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        write_high_score(&self.path, score)?;
        self.best = score;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_starts_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScore::load(dir.path().join("high_score.txt"));
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_record_only_improvements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        let mut scores = HighScore::load(&path);

        assert!(scores.record(10).unwrap());
        assert!(!scores.record(10).unwrap());
        assert!(!scores.record(3).unwrap());
        assert_eq!(scores.best(), 10);

        let reloaded = HighScore::load(&path);
        assert_eq!(reloaded.best(), 10);
    }

    #[test]
    fn test_record_zero_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        let mut scores = HighScore::load(&path);
        assert!(!scores.record(0).unwrap());
        assert!(!path.exists());
    }
}
