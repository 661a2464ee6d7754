//! Type definitions for chess game logic
//!
//! Positions, colors, piece kinds and the piece record owned by the board
//! registry. These are plain values with no engine state attached, so rules,
//! persistence and presentation code can all share them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: i8 = 8;

/// Board coordinate as (row, column)
///
/// Values range from 0 to 7 on both axes. Stored as signed integers so the
/// captured-king sentinel `(-1, -1)` fits the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    /// Marks a king that has been captured
    pub const SENTINEL: Position = Position { row: -1, column: -1 };

    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    /// Whether both coordinates lie within 0..8
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.column)
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// Row-major index in 0..64
    ///
    /// Only meaningful for on-board positions.
    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.column as usize
    }

    /// All 64 board positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::new(row, column)))
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, column): (i8, i8)) -> Self {
        Position::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color advances by
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Stable identity of a piece for the lifetime of a session
///
/// Assigned by [`crate::game::rules::BoardState`] when the piece is placed and
/// used to key animation entries and move notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chess piece as recorded in the live registry or the dead pile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    pub alive: bool,
    pub move_count: u32,
}

impl Piece {
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }
}

/// A proposed or committed relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub origin: Position,
    pub destination: Position,
    pub is_capture: bool,
}
