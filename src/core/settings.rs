//! Settings and their persistence
//!
//! [`GameSettings`] is stored as pretty JSON in `settings.json` inside the
//! platform config directory, falling back to the working directory when no
//! config directory can be resolved.
//!
//! # Error Handling
//!
//! [`GameSettings::load`] never fails: a missing, unreadable or invalid
//! file yields the defaults with a warning. [`GameSettings::load_from`] and
//! [`GameSettings::save_to`] report errors for callers that care.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use guild_engine::go::SUPPORTED_SIZES;
use guild_engine::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{CoreError, CoreResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences shared by every game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Cosmetic pause before the opponent moves, before difficulty scaling
    pub think_delay_ms: u64,

    pub difficulty: Difficulty,

    /// Plies searched by the Hard chess opponent
    pub chess_search_depth: u32,

    /// Plies searched by the Hard checkers opponent
    pub checkers_search_depth: u32,

    /// One of 9, 13 or 19
    pub go_board_size: usize,

    /// Captures that win a Go game; `None` plays on indefinitely
    pub go_capture_target: Option<u32>,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            think_delay_ms: 500,
            difficulty: Difficulty::Medium,
            chess_search_depth: guild_engine::chess::DEFAULT_SEARCH_DEPTH,
            checkers_search_depth: guild_engine::checkers::DEFAULT_SEARCH_DEPTH,
            go_board_size: 19,
            go_capture_target: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Resolve the settings file path
///
/// E.g. `~/.config/guild-of-games/settings.json` on Linux. Falls back to a
/// local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "GuildOfGames") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

impl GameSettings {
    /// Load from the default location, using defaults on any failure
    pub fn load() -> Self {
        Self::load_or_default(&settings_path())
    }

    /// Load from `path`, using defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Read and validate settings from `path`
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: GameSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to the default location
    pub fn save(&self) -> CoreResult<()> {
        self.save_to(&settings_path())
    }

    /// Write settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !SUPPORTED_SIZES.contains(&self.go_board_size) {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "go_board_size {} is not one of {:?}",
                    self.go_board_size, SUPPORTED_SIZES
                ),
            });
        }
        if self.chess_search_depth == 0 || self.checkers_search_depth == 0 {
            return Err(CoreError::InvalidSettings {
                message: "search depths must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.go_board_size, 19);
    }

    #[test]
    fn test_unsupported_go_size_rejected() {
        let settings = GameSettings {
            go_board_size: 15,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        //! Older files missing newer fields still load
        let settings: GameSettings =
            serde_json::from_str(r#"{"difficulty":"hard","go_board_size":9}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.go_board_size, 9);
        assert_eq!(settings.think_delay_ms, 500);
    }
}
