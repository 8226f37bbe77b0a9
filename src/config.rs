//! Session configuration
//!
//! Where the save slot and high score list live on disk, and the viewport
//! the simulation is built for. Persisted as JSON next to the other files;
//! a missing or unreadable config falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Save slot location
    pub save_path: PathBuf,
    /// High score list location
    pub highscore_path: PathBuf,
    /// Viewport the simulation runs in
    pub viewport: Viewport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("savedgame.json"),
            highscore_path: PathBuf::from("highscores.txt"),
            viewport: Viewport::default(),
        }
    }
}

impl SessionConfig {
    /// Read a config from `path`, falling back to defaults if the file is
    /// missing or does not parse. The fallback is logged, never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("config {} unreadable ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.save_path, PathBuf::from("savedgame.json"));
        assert_eq!(config.viewport.width, 800.0);
        assert_eq!(config.viewport.height, 600.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SessionConfig::default();
        config.viewport = Viewport::new(1024.0, 768.0);
        config.save(&path).unwrap();

        assert_eq!(SessionConfig::load_or_default(&path), config);
    }

    #[test]
    fn test_missing_or_bad_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(
            SessionConfig::load_or_default(&missing),
            SessionConfig::default()
        );

        let bad = dir.path().join("config.json");
        fs::write(&bad, "not json").unwrap();
        assert_eq!(
            SessionConfig::load_or_default(&bad),
            SessionConfig::default()
        );
    }
}
