//! High score files
//!
//! Each game keeps its best score as a single integer in a plain text file.
//! Reads never fail: a missing or malformed file counts as 0.

use std::fs;
use std::io;
use std::path::Path;

/// Read the stored high score, 0 if the file is missing or malformed
pub fn read_high_score(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(contents) => match contents.trim().parse::<u64>() {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, path.display());
                score
            }
            Err(e) => {
                log::warn!("Malformed high score in {}: {}", path.display(), e);
                0
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No high score at {}, starting from 0", path.display());
            0
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            0
        }
    }
}

/// Overwrite the file with `score`
pub fn write_high_score(path: &Path, score: u64) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, score.to_string())?;
    log::info!("High score {} saved to {}", score, path.display());
    Ok(())
}
