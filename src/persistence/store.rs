//! Snapshot storage backends

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use super::{PersistenceGateway, SavedGame};
use crate::core::error::PersistenceResult;

/// Save filename
const SAVE_FILENAME: &str = "savegame.json";

/// Resolve the default save file path
///
/// Returns `savegame.json` in the user's data directory, e.g.
/// `~/.local/share/chessboard/savegame.json`. Falls back to a local
/// `savegame.json` if the data directory cannot be determined.
pub fn default_save_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "Chessboard") {
        proj_dirs.data_dir().join(SAVE_FILENAME)
    } else {
        PathBuf::from(SAVE_FILENAME)
    }
}

/// Stores the snapshot as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(default_save_path())
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for JsonFileStore {
    fn load(&self) -> PersistenceResult<Option<SavedGame>> {
        if !self.path.exists() {
            info!("[SAVE] No save file found at {:?}", self.path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let saved = SavedGame::from_layout_document(&contents)?;
        info!(
            "[SAVE] Loaded save from {:?} ({} alive, {} dead, round {})",
            self.path,
            saved.alive_pieces.len(),
            saved.dead_pieces.len(),
            saved.round
        );
        Ok(Some(saved))
    }

    fn save(&mut self, game: &SavedGame) -> PersistenceResult<()> {
        // Ensure the directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, game.to_json()?)?;
        debug!("[SAVE] Saved round {} to {:?}", game.round, self.path);
        Ok(())
    }
}

/// Keeps the last snapshot in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<SavedGame>,
    save_count: usize,
}

impl MemoryStore {
    /// A store that already holds a snapshot
    pub fn with_save(game: SavedGame) -> Self {
        Self {
            saved: Some(game),
            save_count: 0,
        }
    }

    pub fn saved(&self) -> Option<&SavedGame> {
        self.saved.as_ref()
    }

    /// Number of `save` calls since creation
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PersistenceGateway for MemoryStore {
    fn load(&self) -> PersistenceResult<Option<SavedGame>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, game: &SavedGame) -> PersistenceResult<()> {
        self.saved = Some(game.clone());
        self.save_count += 1;
        Ok(())
    }
}
