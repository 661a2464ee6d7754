//! Turn tracking
//!
//! The round counter is the single source of truth for whose turn it is.
//! White moves on odd rounds, Black on even rounds, and every committed move
//! advances the round by exactly one.
//!
//! # Turn Flow
//!
//! ```text
//! Round 1: White plays → advance() → Round 2: Black plays → advance() → Round 3: White plays
//! ```

use crate::game::types::Color;

/// Tracks the current round and derives the side to move from its parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    round: u32,
}

impl Default for TurnController {
    fn default() -> Self {
        Self { round: 1 }
    }
}

impl TurnController {
    /// Resume at a stored round; rounds start at 1
    pub fn with_round(round: u32) -> Self {
        Self { round: round.max(1) }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether `color` may move in `round`
    pub fn is_turn_of_round(color: Color, round: u32) -> bool {
        match color {
            Color::White => round % 2 == 1,
            Color::Black => round % 2 == 0,
        }
    }

    pub fn is_turn_of(&self, color: Color) -> bool {
        Self::is_turn_of_round(color, self.round)
    }

    pub fn current_color(&self) -> Color {
        if self.is_turn_of(Color::White) {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Move to the next round
    ///
    /// Call exactly once per committed move.
    pub fn advance(&mut self) {
        self.round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_controller_default() {
        //! Verifies that games start with White to move in round 1
        let turn = TurnController::default();
        assert_eq!(turn.round(), 1);
        assert_eq!(turn.current_color(), Color::White);
    }

    #[test]
    fn test_turn_parity_alternates() {
        //! If round N permits one color, round N+1 permits the other
        for round in 1..200 {
            let white_now = TurnController::is_turn_of_round(Color::White, round);
            let black_now = TurnController::is_turn_of_round(Color::Black, round);
            assert_ne!(white_now, black_now, "Exactly one side moves in round {}", round);
            assert_eq!(
                white_now,
                TurnController::is_turn_of_round(Color::Black, round + 1),
                "Round {} and {} must alternate",
                round,
                round + 1
            );
        }
    }

    #[test]
    fn test_advance_increments_by_one() {
        let mut turn = TurnController::default();
        turn.advance();
        assert_eq!(turn.round(), 2);
        assert_eq!(turn.current_color(), Color::Black);
        assert!(!turn.is_turn_of(Color::White));

        turn.advance();
        assert_eq!(turn.round(), 3);
        assert_eq!(turn.current_color(), Color::White);
    }

    #[test]
    fn test_with_round_clamps_to_one() {
        assert_eq!(TurnController::with_round(0).round(), 1);
        assert_eq!(TurnController::with_round(6).current_color(), Color::Black);
    }
}
