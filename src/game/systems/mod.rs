//! Chess game systems - the code that changes game state
//!
//! # System Organization
//!
//! - [`game_init`] - Rebuilds every resource from a saved snapshot
//! - [`movement`] - Validates and commits moves through [`MoveExecutor`]
//!
//! # Execution Order
//!
//! ```text
//! ┌─────────────────┐
//! │ game_init       │  SavedGame -> BoardState, dead pile, round
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ validate        │  Turn, legal destination, capture target
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ commit          │  Dead pile, relocation, animation, round,
//! │                 │  MoveCommitted event
//! └─────────────────┘
//! ```

pub mod game_init;
pub mod movement;

pub use game_init::build_executor;
pub use movement::{MoveExecutor, MoveOutcome};
