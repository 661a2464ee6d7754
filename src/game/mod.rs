//! Chess game logic - board state, move rules and the session around them
//!
//! Pure game logic with no rendering. A front end drives a [`GameSession`]
//! and reads everything it draws back out of it.
//!
//! # Module Organization
//!
//! - `types` - Positions, colors, pieces and moves
//! - `rules` - Movement legality and the board registry
//! - `resources` - Turn, dead pile, history, animation, clock, selection
//! - `systems` - Snapshot restore and move execution
//! - `events` - Move-committed notifications
//! - `session` - Composition root with select/tick/pause input
//! - `error` - Board, move and session errors
//!
//! **Order of a move**:
//! 1. `GameSession::select_cell` (two clicks)
//! 2. `MoveExecutor::validate`
//! 3. `MoveExecutor::commit` (dead pile, relocation, animation, round, event)
//! 4. Autosave

pub mod error;
pub mod events;
pub mod resources;
pub mod rules;
pub mod session;
pub mod systems;
pub mod types;

pub use error::{BoardError, GameError, GameResult, MoveError, MoveResult};
pub use events::{MoveCommitted, MoveEventBus};
pub use session::{GameSession, SelectionOutcome};
pub use systems::{MoveExecutor, MoveOutcome};
