//! Captured pieces (the dead pile)
//!
//! Holds every piece removed from the live registry by a capture, grouped by
//! the side that took it, and reports the material balance for display.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (capturing it ends the game)

use crate::game::types::{Color, Piece, PieceKind};

/// Dead pile tracking captured pieces for both sides
///
/// # Fields
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Debug, Default, Clone)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<Piece>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a captured piece
    ///
    /// The piece is stored as not alive regardless of the flag it arrives with.
    pub fn add_to_dead_pile(&mut self, mut piece: Piece) {
        piece.alive = false;
        match piece.color {
            // If white piece was captured, black gets credit
            Color::White => self.black_captured.push(piece),
            // If black piece was captured, white gets credit
            Color::Black => self.white_captured.push(piece),
        }
    }

    /// All captured pieces, white's captures first
    pub fn all(&self) -> impl Iterator<Item = &Piece> {
        self.white_captured.iter().chain(self.black_captured.iter())
    }

    pub fn len(&self) -> usize {
        self.white_captured.len() + self.black_captured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Material difference in pawn units
    ///
    /// Positive if White is ahead, negative if Black is ahead, 0 if equal.
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| piece_value(p.kind)).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| piece_value(p.kind)).sum();
        white_score - black_score
    }
}

fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{PieceId, Position};

    fn dead(kind: PieceKind, color: Color) -> Piece {
        Piece {
            id: PieceId(0),
            kind,
            color,
            position: Position::new(0, 0),
            alive: true,
            move_count: 0,
        }
    }

    #[test]
    fn test_captured_pieces_default() {
        //! Verifies that the dead pile starts empty
        let captured = CapturedPieces::default();
        assert!(captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_add_to_dead_pile_credits_opponent() {
        let mut captured = CapturedPieces::default();
        captured.add_to_dead_pile(dead(PieceKind::Queen, Color::Black));
        captured.add_to_dead_pile(dead(PieceKind::Rook, Color::White));

        assert_eq!(captured.white_captured.len(), 1);
        assert_eq!(captured.white_captured[0].kind, PieceKind::Queen);
        assert_eq!(captured.black_captured[0].kind, PieceKind::Rook);
        assert!(captured.all().all(|p| !p.alive), "Dead pile only holds dead pieces");
    }

    #[test]
    fn test_material_advantage() {
        //! Tests material calculation when White is ahead
        let mut captured = CapturedPieces::default();
        captured.add_to_dead_pile(dead(PieceKind::Queen, Color::Black)); // White takes Queen (9)
        captured.add_to_dead_pile(dead(PieceKind::Pawn, Color::White)); // Black takes Pawn (1)

        assert_eq!(captured.material_advantage(), 8, "White should be +8 (9-1)");
    }
}
