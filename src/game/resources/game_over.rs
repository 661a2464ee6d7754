//! Game over state
//!
//! The only way to win is to capture the opposing king. A captured king's
//! tracked position is the sentinel, so the outcome is a pure function of the
//! two king fields on the board.

use crate::game::types::{Color, Position};

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWon,
    BlackWon,
}

impl GameOutcome {
    /// Derive the outcome from tracked king positions
    ///
    /// Returns `None` while both kings are alive or untracked.
    pub fn from_kings(white_king: Option<Position>, black_king: Option<Position>) -> Option<Self> {
        if white_king.is_some_and(Position::is_sentinel) {
            Some(GameOutcome::BlackWon)
        } else if black_king.is_some_and(Position::is_sentinel) {
            Some(GameOutcome::WhiteWon)
        } else {
            None
        }
    }

    /// Outcome produced by capturing the king of `captured_color`
    pub fn king_captured(captured_color: Color) -> Self {
        match captured_color {
            Color::White => GameOutcome::BlackWon,
            Color::Black => GameOutcome::WhiteWon,
        }
    }

    pub fn winner(&self) -> Color {
        match self {
            GameOutcome::WhiteWon => Color::White,
            GameOutcome::BlackWon => Color::Black,
        }
    }

    /// Banner text shown by the presentation layer
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::WhiteWon => "White Team Won!",
            GameOutcome::BlackWon => "Black Team Won!",
        }
    }
}
