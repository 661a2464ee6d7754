//! Chess rules module - Pure game logic
//!
//! Implements move legality and board state management with no dependency on
//! turn order, animation or persistence, allowing easy testing.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece kind (pawn, knight, bishop, rook, queen, king)
//! - `board_state` - Live piece registry, cell occupancy and king tracking
//!
//! There is no check detection: the game ends when a king is captured, so a
//! move that leaves the mover's own king exposed is still legal.

pub mod board_state;
pub mod piece_moves;


// Re-export commonly used items
pub use board_state::{BoardState, Cell};
pub use piece_moves::{can_capture, is_in_range, possible_moves, possible_moves_for};
