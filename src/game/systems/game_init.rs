//! Game initialization from a snapshot
//!
//! Builds a fresh [`MoveExecutor`] from a [`SavedGame`]: live pieces go on
//! the board with their move counters, captured pieces go straight to the
//! dead pile, and every live piece is rendered at its cell with nothing
//! animating.
//!
//! # Resources Initialized
//!
//! - `BoardState` - live pieces and king tracking
//! - `CapturedPieces` - dead pile, credited to the capturing side
//! - `AnimationQueue` - rendered positions at rest on the layout
//! - `TurnController` - the stored round
//!
//! A captured king in the dead pile sets that king's tracked position to the
//! sentinel, so a finished game restores as finished.

use tracing::info;

use crate::core::settings::EngineSettings;
use crate::game::error::GameResult;
use crate::game::resources::{AnimationQueue, CapturedPieces, TurnController};
use crate::game::rules::BoardState;
use crate::game::systems::movement::MoveExecutor;
use crate::game::types::{Piece, PieceKind};
use crate::persistence::SavedGame;

/// Rebuild every game resource from `saved`
///
/// Fails with [`crate::game::GameError::Persistence`] if the snapshot does not
/// validate, and with [`crate::game::GameError::Board`] if two live entries
/// share a cell; nothing is returned in either case.
pub fn build_executor(saved: &SavedGame, settings: &EngineSettings) -> GameResult<MoveExecutor> {
    saved.validate()?;
    let layout = settings.board_layout();
    let mut board = BoardState::new();
    let mut animation = AnimationQueue::new(settings.animation_precision_digits);
    let mut dead_pile = CapturedPieces::default();

    for record in &saved.alive_pieces {
        let position = record.position();
        let id = board.place_piece(record.kind, record.color, position, record.move_count)?;
        animation.place(id, layout.to_visual(position));
    }

    for record in &saved.dead_pieces {
        let id = board.allocate_id();
        dead_pile.add_to_dead_pile(Piece {
            id,
            kind: record.kind,
            color: record.color,
            position: record.position(),
            alive: false,
            move_count: record.move_count,
        });
        if record.kind == PieceKind::King {
            board.mark_king_captured(record.color);
        }
    }

    let turn = TurnController::with_round(saved.round);
    info!(
        "[GAME_INIT] Board restored: {} live, {} captured, round {}",
        board.len(),
        dead_pile.len(),
        turn.round()
    );

    Ok(MoveExecutor::new(board, turn, dead_pile, animation, layout))
}
