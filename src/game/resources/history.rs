//! Move history

use crate::game::types::{Color, PieceId, PieceKind, Position};

/// One committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceKind>,
    /// Round in which the move was played
    pub round: u32,
}

/// Ordered record of committed moves
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
