//! Selection state for the select-then-move interaction

use crate::game::types::{PieceId, Position};

/// Currently selected piece and its highlighted destinations
#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub selected_piece: Option<PieceId>,
    pub selected_position: Option<Position>,
    pub possible_moves: Vec<Position>,
}

impl Selection {
    pub fn select(&mut self, piece: PieceId, position: Position, possible_moves: Vec<Position>) {
        self.selected_piece = Some(piece);
        self.selected_position = Some(position);
        self.possible_moves = possible_moves;
    }

    pub fn clear(&mut self) {
        self.selected_piece = None;
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_piece.is_some()
    }
}
