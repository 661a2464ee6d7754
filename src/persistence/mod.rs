//! Save-game persistence
//!
//! A [`SavedGame`] is a full snapshot of the board: every live piece, every
//! captured piece and the round to be played. Snapshots are written after
//! each committed move with overwrite semantics and read once at startup.
//!
//! # Storage
//!
//! - [`JsonFileStore`] - pretty-printed JSON in the platform data directory
//! - [`MemoryStore`] - keeps the last snapshot in memory (headless runs, tests)
//!
//! When no save exists the session starts from the bundled layout document
//! `assets/starting_pos.json`, parsed by [`SavedGame::starting_position`].

pub mod store;

use serde::{Deserialize, Serialize};

use crate::core::error::{PersistenceError, PersistenceResult};
use crate::game::rules::BoardState;
use crate::game::resources::CapturedPieces;
use crate::game::types::{Color, Piece, PieceKind, Position};

pub use store::{default_save_path, JsonFileStore, MemoryStore};

/// Standard starting arrangement shipped with the crate
const STARTING_LAYOUT: &str = include_str!("../../assets/starting_pos.json");

/// One piece as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub row: i8,
    pub column: i8,
    pub kind: PieceKind,
    pub color: Color,
    pub alive: bool,
    pub move_count: u32,
}

impl PieceRecord {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

impl From<&Piece> for PieceRecord {
    fn from(piece: &Piece) -> Self {
        Self {
            row: piece.position.row,
            column: piece.position.column,
            kind: piece.kind,
            color: piece.color,
            alive: piece.alive,
            move_count: piece.move_count,
        }
    }
}

fn first_round() -> u32 {
    1
}

/// Full board snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub alive_pieces: Vec<PieceRecord>,
    pub dead_pieces: Vec<PieceRecord>,
    /// Round to be played next; absent in older documents
    #[serde(default = "first_round")]
    pub round: u32,
}

impl SavedGame {
    /// Parse a layout or save document
    pub fn from_layout_document(document: &str) -> PersistenceResult<Self> {
        let saved: SavedGame = serde_json::from_str(document)?;
        saved.validate()?;
        Ok(saved)
    }

    /// The bundled standard starting arrangement
    pub fn starting_position() -> PersistenceResult<Self> {
        Self::from_layout_document(STARTING_LAYOUT)
    }

    /// Snapshot the current board, dead pile and round
    ///
    /// Live pieces are written in row-major order so identical boards produce
    /// identical documents.
    pub fn capture(board: &BoardState, dead_pile: &CapturedPieces, round: u32) -> Self {
        let mut alive_pieces: Vec<PieceRecord> = board.pieces().map(PieceRecord::from).collect();
        alive_pieces.sort_by_key(|record| record.position());
        Self {
            alive_pieces,
            dead_pieces: dead_pile.all().map(PieceRecord::from).collect(),
            round,
        }
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Per-record sanity checks that do not need a board
    ///
    /// Each color has at most one king across the live and dead lists.
    /// Occupancy conflicts are caught when the board is rebuilt.
    pub fn validate(&self) -> PersistenceResult<()> {
        if let Some(record) = self
            .alive_pieces
            .iter()
            .find(|r| !r.alive || !r.position().is_on_board())
        {
            return Err(PersistenceError::InvalidSnapshot {
                message: format!(
                    "live entry {:?} {:?} at {} must be alive and on the board",
                    record.color,
                    record.kind,
                    record.position()
                ),
            });
        }
        if let Some(record) = self.dead_pieces.iter().find(|r| r.alive) {
            return Err(PersistenceError::InvalidSnapshot {
                message: format!("dead entry {:?} {:?} is marked alive", record.color, record.kind),
            });
        }
        for color in [Color::White, Color::Black] {
            let kings = self
                .alive_pieces
                .iter()
                .chain(&self.dead_pieces)
                .filter(|r| r.kind == PieceKind::King && r.color == color)
                .count();
            if kings > 1 {
                return Err(PersistenceError::InvalidSnapshot {
                    message: format!("{} {:?} kings recorded, at most one allowed", kings, color),
                });
            }
        }
        Ok(())
    }
}

/// Storage backend for snapshots
pub trait PersistenceGateway {
    /// Most recent save, or `None` if nothing was saved yet
    fn load(&self) -> PersistenceResult<Option<SavedGame>>;

    /// Overwrite the stored snapshot
    fn save(&mut self, game: &SavedGame) -> PersistenceResult<()>;
}
