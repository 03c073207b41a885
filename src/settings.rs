//! Game settings
//!
//! Persisted as JSON next to the high score files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;
use crate::platform::ControlTable;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate of the realtime clock
    pub fps: u32,
    /// Key bindings
    pub controls: ControlTable,

    // === Persistence ===
    pub jumpbot_high_score_path: PathBuf,
    pub asteroids_high_score_path: PathBuf,

    // === Debug ===
    /// Outline collision boxes
    pub show_hitboxes: bool,
    /// Asteroids spawner seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: TICKS_PER_SECOND,
            controls: ControlTable::default(),
            jumpbot_high_score_path: PathBuf::from("jumpbot_high_score.txt"),
            asteroids_high_score_path: PathBuf::from("asteroids_high_score.txt"),
            show_hitboxes: false,
            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
