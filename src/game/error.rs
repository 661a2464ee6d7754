//! Error types for game module
//!
//! Board-level invariant errors, move rejections and the session-level error
//! that wraps them together with persistence failures.

use crate::core::error::PersistenceError;
use crate::game::types::{Color, Position};

/// Errors raised by [`crate::game::rules::BoardState`] mutations
///
/// Every variant is an invariant violation: correct calling sequences never
/// produce them, so callers should abort rather than try to repair the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A second piece was about to be placed on an occupied cell
    #[error("Cell {position} is already occupied")]
    DuplicateOccupant { position: Position },

    /// No live piece at the given position
    #[error("No piece found at {position}")]
    NotFound { position: Position },

    /// Position outside the 8x8 board
    #[error("Position {position} is off the board")]
    OffBoard { position: Position },
}

/// Errors returned when proposing or committing a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("No piece at origin {position}")]
    NoPieceAtOrigin { position: Position },

    #[error("Not {color}'s turn in round {round}")]
    NotYourTurn { color: Color, round: u32 },

    #[error("Illegal destination: {from} -> {to}")]
    IllegalDestination { from: Position, to: Position },

    /// A king has already been captured
    #[error("Game is over")]
    GameOver,

    /// State changed between validation and commit
    #[error("Engine invariant violated: {message}")]
    EngineInvariantViolation { message: String },

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl MoveError {
    /// Fatal errors mean the board may be inconsistent and the session must stop.
    ///
    /// Everything else is a rejected user input that leaves the board untouched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MoveError::EngineInvariantViolation { .. } | MoveError::Board(_)
        )
    }
}

/// Errors that can occur while running a game session
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Restoring a snapshot produced an inconsistent board
    #[error("Invalid board snapshot: {0}")]
    Board(#[from] BoardError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Result type alias for move execution
pub type MoveResult<T> = Result<T, MoveError>;
