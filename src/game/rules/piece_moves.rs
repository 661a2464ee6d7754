//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.

use super::board_state::BoardState;
use crate::game::types::{Color, Piece, PieceKind, Position};

/// Check if a move is valid for a given piece kind
pub fn is_valid_move(
    kind: PieceKind,
    color: Color,
    from: Position,
    to: Position,
    board_state: &BoardState,
    has_moved: bool,
) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't move off the board
    if !to.is_on_board() {
        return false;
    }

    // Can't capture your own pieces
    if board_state.color_at(to) == Some(color) {
        return false;
    }

    match kind {
        PieceKind::Pawn => is_valid_pawn_move(from, to, color, board_state, has_moved),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(from, to, board_state),
        PieceKind::Rook => is_valid_rook_move(from, to, board_state),
        PieceKind::Queen => is_valid_queen_move(from, to, board_state),
        PieceKind::King => is_valid_king_move(from, to),
    }
}

/// Get all possible moves for a piece, in row-major order
pub fn possible_moves(
    kind: PieceKind,
    color: Color,
    origin: Position,
    board_state: &BoardState,
    has_moved: bool,
) -> Vec<Position> {
    Position::all()
        .filter(|&to| is_valid_move(kind, color, origin, to, board_state, has_moved))
        .collect()
}

/// Possible moves for a piece already on the board
pub fn possible_moves_for(piece: &Piece, board_state: &BoardState) -> Vec<Position> {
    possible_moves(
        piece.kind,
        piece.color,
        piece.position,
        board_state,
        piece.has_moved(),
    )
}

/// Whether `kind` could physically reach `to` from `from` on an empty board
///
/// Ignores occupancy and color. Pawns are accepted in either row direction.
pub fn is_in_range(kind: PieceKind, from: Position, to: Position) -> bool {
    if from == to || !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let dr = (to.row - from.row).abs();
    let dc = (to.column - from.column).abs();

    match kind {
        PieceKind::Pawn => (dr == 1 && dc <= 1) || (dr == 2 && dc == 0),
        PieceKind::Knight => (dr == 2 && dc == 1) || (dr == 1 && dc == 2),
        PieceKind::Bishop => dr == dc,
        PieceKind::Rook => dr == 0 || dc == 0,
        PieceKind::Queen => dr == dc || dr == 0 || dc == 0,
        PieceKind::King => dr <= 1 && dc <= 1,
    }
}

/// Whether `attacker` may move onto the square of `target` and take it
///
/// Requires the square to be a legal destination for the attacker and the
/// target to belong to the other side, regardless of which side moves.
pub fn can_capture(attacker: &Piece, target: &Piece, board_state: &BoardState) -> bool {
    attacker.color != target.color
        && is_valid_move(
            attacker.kind,
            attacker.color,
            attacker.position,
            target.position,
            board_state,
            attacker.has_moved(),
        )
}

fn is_valid_pawn_move(
    from: Position,
    to: Position,
    color: Color,
    board_state: &BoardState,
    has_moved: bool,
) -> bool {
    let direction = color.forward();
    let dr = to.row - from.row;
    let dc = to.column - from.column;

    // Forward move
    if dc == 0 && dr == direction {
        return board_state.is_empty(to);
    }

    // Double move from starting position
    if dc == 0 && dr == 2 * direction && !has_moved {
        let intermediate = Position::new(from.row + direction, from.column);
        return board_state.is_empty(intermediate) && board_state.is_empty(to);
    }

    // Capture diagonally
    if dc.abs() == 1 && dr == direction {
        return board_state
            .color_at(to)
            .is_some_and(|target_color| target_color != color);
    }

    false
}

fn is_valid_knight_move(from: Position, to: Position) -> bool {
    is_in_range(PieceKind::Knight, from, to)
}

fn is_valid_bishop_move(from: Position, to: Position, board_state: &BoardState) -> bool {
    // Must move diagonally
    if !is_in_range(PieceKind::Bishop, from, to) {
        return false;
    }

    is_path_clear(from, to, board_state)
}

fn is_valid_rook_move(from: Position, to: Position, board_state: &BoardState) -> bool {
    // Must move horizontally or vertically
    if !is_in_range(PieceKind::Rook, from, to) {
        return false;
    }

    is_path_clear(from, to, board_state)
}

fn is_valid_queen_move(from: Position, to: Position, board_state: &BoardState) -> bool {
    is_valid_rook_move(from, to, board_state) || is_valid_bishop_move(from, to, board_state)
}

fn is_valid_king_move(from: Position, to: Position) -> bool {
    is_in_range(PieceKind::King, from, to)
}

/// Every cell strictly between `from` and `to` is empty
fn is_path_clear(from: Position, to: Position, board_state: &BoardState) -> bool {
    let dr = (to.row - from.row).signum();
    let dc = (to.column - from.column).signum();

    let mut current = Position::new(from.row + dr, from.column + dc);
    while current != to {
        if !board_state.is_empty(current) {
            return false;
        }
        current = Position::new(current.row + dr, current.column + dc);
    }

    true
}
