//! Board state representation
//!
//! The single source of truth for which piece stands on which cell. Pieces are
//! owned by the live registry; cells only hold the [`PieceId`] of their
//! occupant. Every mutation updates the piece record and the cell occupants in
//! the same call so the two views never disagree.

use std::collections::HashMap;

use tracing::debug;

use crate::game::error::BoardError;
use crate::game::types::{Color, Piece, PieceId, PieceKind, Position};

/// One of the 64 fixed board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub occupant: Option<PieceId>,
}

/// Live piece registry plus cell occupancy and king tracking
#[derive(Debug, Clone)]
pub struct BoardState {
    cells: Vec<Cell>,
    pieces: HashMap<PieceId, Piece>,
    white_king: Option<Position>,
    black_king: Option<Position>,
    next_id: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// An empty board with all 64 cells created
    pub fn new() -> Self {
        Self {
            cells: Position::all()
                .map(|position| Cell { position, occupant: None })
                .collect(),
            pieces: HashMap::new(),
            white_king: None,
            black_king: None,
            next_id: 0,
        }
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        position.is_on_board().then(|| &self.cells[position.index()])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.cell(position)
            .and_then(|cell| cell.occupant)
            .and_then(|id| self.pieces.get(&id))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Live pieces, in no particular order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.piece_at(position).map(|piece| piece.color)
    }

    /// Number of live pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// `None` until the king is placed, [`Position::SENTINEL`] once captured
    pub fn king_position(&self, color: Color) -> Option<Position> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Put a new live piece on the board
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
        move_count: u32,
    ) -> Result<PieceId, BoardError> {
        if !position.is_on_board() {
            return Err(BoardError::OffBoard { position });
        }
        if self.cells[position.index()].occupant.is_some() {
            return Err(BoardError::DuplicateOccupant { position });
        }

        let id = self.allocate_id();
        self.pieces.insert(
            id,
            Piece {
                id,
                kind,
                color,
                position,
                alive: true,
                move_count,
            },
        );
        self.cells[position.index()].occupant = Some(id);
        if kind == PieceKind::King {
            self.track_king(color, position);
        }

        debug!("[BOARD] Placed {:?} {:?} {} at {}", color, kind, id, position);
        Ok(id)
    }

    /// Take a piece out of the live registry
    ///
    /// The returned record is marked not alive. Removing a king moves its
    /// tracked position to the sentinel.
    pub fn remove_piece(&mut self, position: Position) -> Result<Piece, BoardError> {
        let id = self.occupant(position)?;
        let mut piece = self
            .pieces
            .remove(&id)
            .ok_or(BoardError::NotFound { position })?;
        self.cells[position.index()].occupant = None;
        piece.alive = false;
        if piece.is_king() {
            self.track_king(piece.color, Position::SENTINEL);
        }

        debug!("[BOARD] Removed {:?} {:?} {} from {}", piece.color, piece.kind, id, position);
        Ok(piece)
    }

    /// Move the piece at `from` onto the empty cell `to`
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<PieceId, BoardError> {
        let id = self.occupant(from)?;
        if !to.is_on_board() {
            return Err(BoardError::OffBoard { position: to });
        }
        if self.cells[to.index()].occupant.is_some() {
            return Err(BoardError::DuplicateOccupant { position: to });
        }
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(BoardError::NotFound { position: from })?;

        piece.position = to;
        let (kind, color) = (piece.kind, piece.color);
        self.cells[from.index()].occupant = None;
        self.cells[to.index()].occupant = Some(id);
        if kind == PieceKind::King {
            self.track_king(color, to);
        }
        Ok(id)
    }

    /// Bump the move counter of the piece standing at `position`
    pub(crate) fn record_move(&mut self, position: Position) -> Result<u32, BoardError> {
        let id = self.occupant(position)?;
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(BoardError::NotFound { position })?;
        piece.move_count += 1;
        Ok(piece.move_count)
    }

    /// Reserve an identity for a piece that never enters the live registry,
    /// such as a dead-pile entry restored from a snapshot
    pub(crate) fn allocate_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Mark a king as captured when restoring a snapshot whose dead pile holds it
    pub(crate) fn mark_king_captured(&mut self, color: Color) {
        self.track_king(color, Position::SENTINEL);
    }

    fn occupant(&self, position: Position) -> Result<PieceId, BoardError> {
        self.cell(position)
            .and_then(|cell| cell.occupant)
            .ok_or(BoardError::NotFound { position })
    }

    fn track_king(&mut self, color: Color, position: Position) {
        match color {
            Color::White => self.white_king = Some(position),
            Color::Black => self.black_king = Some(position),
        }
    }
}
