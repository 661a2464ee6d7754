//! Chess game resources - Session-wide game state
//!
//! Each resource owns one slice of state that the move executor and the
//! session update together, one call at a time on the game thread.
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`TurnController`] - Round counter and side to move
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its destinations
//!
//! ## Game History
//! - [`MoveHistory`] - Committed moves in order
//! - [`CapturedPieces`] - The dead pile and material balance
//!
//! ## Presentation
//! - [`AnimationQueue`] - Rendered positions converging on logical ones
//! - [`GameClock`] - Elapsed session time
//!
//! ## Game Status
//! - [`GameOutcome`] - Win state derived from king capture

pub mod animation;
pub mod captured;
pub mod game_over;
pub mod history;
pub mod selection;
pub mod timer;
pub mod turn;


// Re-export all resources for convenience
pub use animation::*;
pub use captured::*;
pub use game_over::*;
pub use history::*;
pub use selection::*;
pub use timer::*;
pub use turn::*;
