//! Engine settings and their persistence
//!
//! Loads [`EngineSettings`] from a JSON file. Missing fields take their
//! defaults, so older or hand-written files keep working.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory, falling back to the working directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::PersistenceResult;
use crate::game::resources::{BoardLayout, DEFAULT_LERP_FACTOR, DEFAULT_PRECISION_DIGITS};
use crate::persistence::default_save_path;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Tunables for the engine and its persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fraction of the remaining distance an animation covers per tick (0.0 to 1.0)
    pub animation_lerp_factor: f32,

    /// Decimal digits compared when deciding an animation has arrived
    pub animation_precision_digits: u32,

    /// Scene coordinates of cell (0, 0)
    pub board_origin: [f32; 2],

    /// Whether to save after every committed move
    pub autosave: bool,

    /// Save file override; `None` uses the platform data directory
    pub save_path: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let layout = BoardLayout::default();
        Self {
            animation_lerp_factor: DEFAULT_LERP_FACTOR,
            animation_precision_digits: DEFAULT_PRECISION_DIGITS,
            board_origin: [layout.origin_x, layout.origin_y],
            autosave: true,
            save_path: None,
        }
    }
}

impl EngineSettings {
    pub fn board_layout(&self) -> BoardLayout {
        BoardLayout {
            origin_x: self.board_origin[0],
            origin_y: self.board_origin[1],
        }
    }

    pub fn resolved_save_path(&self) -> PathBuf {
        self.save_path.clone().unwrap_or_else(default_save_path)
    }
}

/// Resolve the settings file path
///
/// Returns `settings.json` in the user's configuration directory, or a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "Chessboard") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> EngineSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<EngineSettings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                EngineSettings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            EngineSettings::default()
        }
    }
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings(settings: &EngineSettings, path: &Path) -> PersistenceResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
