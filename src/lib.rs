//! Board-state and move engine for two-player chess
//!
//! - [`game`] - rules, board registry, move execution and the session
//! - [`persistence`] - save snapshots and their storage
//! - [`core`] - settings and shared error types

pub mod core;
pub mod game;
pub mod persistence;

pub use crate::core::settings::EngineSettings;
pub use game::types::{Color, Move, Piece, PieceId, PieceKind, Position};
pub use game::{GameError, GameSession, MoveError, MoveOutcome, SelectionOutcome};
pub use persistence::{JsonFileStore, MemoryStore, PersistenceGateway, SavedGame};
