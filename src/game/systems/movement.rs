//! Move execution
//!
//! [`MoveExecutor`] is the only writer of the board. A move goes through two
//! phases:
//!
//! 1. **validate** - origin occupied, correct side to move, destination in the
//!    piece's legal set, capture target of the opposite color
//! 2. **commit** - re-checks turn, legality and the capture flag against the
//!    current board, then removes
//!    the captured piece to the dead pile, relocates the mover, bumps its move
//!    counter, queues its animation, advances the round and publishes a
//!    [`MoveCommitted`]
//!
//! Every check in commit runs before the first mutation, so a stale move is
//! rejected as a fatal [`MoveError::EngineInvariantViolation`] without
//! touching the board.

use crossbeam_channel::Receiver;
use tracing::{error, info};

use crate::game::error::{MoveError, MoveResult};
use crate::game::events::{MoveCommitted, MoveEventBus};
use crate::game::resources::{
    AnimationQueue, BoardLayout, CapturedPieces, GameOutcome, MoveHistory, MoveRecord,
    TurnController,
};
use crate::game::rules::{can_capture, possible_moves_for, BoardState};
use crate::game::types::{Color, Move, Piece, PieceId, Position};

/// Result of a committed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: PieceId,
    /// Piece sent to the dead pile, if any
    pub captured: Option<Piece>,
    /// Set when this move captured a king
    pub game_over: Option<GameOutcome>,
    /// Round now to be played
    pub round: u32,
}

/// Owns the board and every resource a move touches
#[derive(Debug)]
pub struct MoveExecutor {
    board: BoardState,
    turn: TurnController,
    dead_pile: CapturedPieces,
    history: MoveHistory,
    animation: AnimationQueue,
    layout: BoardLayout,
    events: MoveEventBus,
}

impl MoveExecutor {
    pub fn new(
        board: BoardState,
        turn: TurnController,
        dead_pile: CapturedPieces,
        animation: AnimationQueue,
        layout: BoardLayout,
    ) -> Self {
        Self {
            board,
            turn,
            dead_pile,
            history: MoveHistory::default(),
            animation,
            layout,
            events: MoveEventBus::default(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    pub fn dead_pile(&self) -> &CapturedPieces {
        &self.dead_pile
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn animation(&self) -> &AnimationQueue {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationQueue {
        &mut self.animation
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// Receive a [`MoveCommitted`] for every move committed from now on
    pub fn subscribe(&mut self) -> Receiver<MoveCommitted> {
        self.events.subscribe()
    }

    /// Winner, once a king has been captured
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::from_kings(
            self.board.king_position(Color::White),
            self.board.king_position(Color::Black),
        )
    }

    /// Legal destinations of the piece at `position`; empty if there is none
    pub fn possible_moves_at(&self, position: Position) -> Vec<Position> {
        self.board
            .piece_at(position)
            .map(|piece| possible_moves_for(piece, &self.board))
            .unwrap_or_default()
    }

    /// Validate and commit a move in one step
    pub fn propose_move(
        &mut self,
        owner: Color,
        origin: Position,
        destination: Position,
    ) -> MoveResult<MoveOutcome> {
        let mv = self.validate(owner, origin, destination)?;
        self.commit(mv)
    }

    /// Check a move against the rules and the current board without applying it
    pub fn validate(&self, owner: Color, origin: Position, destination: Position) -> MoveResult<Move> {
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }

        let piece = self
            .board
            .piece_at(origin)
            .ok_or(MoveError::NoPieceAtOrigin { position: origin })?;

        if piece.color != owner || !self.turn.is_turn_of(piece.color) {
            return Err(MoveError::NotYourTurn {
                color: piece.color,
                round: self.turn.round(),
            });
        }

        let illegal = MoveError::IllegalDestination {
            from: origin,
            to: destination,
        };
        if !possible_moves_for(piece, &self.board).contains(&destination) {
            return Err(illegal);
        }

        let is_capture = match self.board.piece_at(destination) {
            Some(target) if can_capture(piece, target, &self.board) => true,
            Some(_) => return Err(illegal),
            None => false,
        };

        Ok(Move {
            origin,
            destination,
            is_capture,
        })
    }

    /// Apply a move produced by [`Self::validate`] on the current board
    ///
    /// A move that is out of turn, illegal or stale is refused with
    /// [`MoveError::EngineInvariantViolation`] and nothing changes.
    pub fn commit(&mut self, mv: Move) -> MoveResult<MoveOutcome> {
        self.check_commit(mv).inspect_err(|e| {
            error!("[MOVE] Refusing to commit {} -> {}: {}", mv.origin, mv.destination, e);
        })?;

        let captured = if mv.is_capture {
            let captured = self.board.remove_piece(mv.destination)?;
            self.animation.forget(captured.id);
            self.dead_pile.add_to_dead_pile(captured);
            Some(captured)
        } else {
            None
        };

        let piece_id = self.board.relocate(mv.origin, mv.destination)?;
        self.board.record_move(mv.destination)?;
        let piece = *self
            .board
            .piece(piece_id)
            .ok_or_else(|| MoveError::EngineInvariantViolation {
                message: format!("moved piece {} vanished from the registry", piece_id),
            })?;

        self.animation
            .enqueue(piece_id, self.layout.to_visual(mv.destination));

        let played_round = self.turn.round();
        self.history.add_move(MoveRecord {
            piece: piece_id,
            kind: piece.kind,
            color: piece.color,
            from: mv.origin,
            to: mv.destination,
            captured: captured.map(|c| c.kind),
            round: played_round,
        });
        self.turn.advance();

        let game_over = captured
            .filter(Piece::is_king)
            .map(|king| GameOutcome::king_captured(king.color));

        info!(
            "[MOVE] Round {}: {:?} {:?} {} -> {}{}",
            played_round,
            piece.color,
            piece.kind,
            mv.origin,
            mv.destination,
            captured
                .map(|c| format!(" capturing {:?} {:?}", c.color, c.kind))
                .unwrap_or_default()
        );
        if let Some(outcome) = game_over {
            info!("[MOVE] ========== KING CAPTURED ========== {}", outcome.message());
        }

        self.events.publish(MoveCommitted {
            piece: piece_id,
            kind: piece.kind,
            color: piece.color,
            from: mv.origin,
            to: mv.destination,
            captured,
            round: self.turn.round(),
        });

        Ok(MoveOutcome {
            mv,
            piece: piece_id,
            captured,
            game_over,
            round: self.turn.round(),
        })
    }

    /// Everything commit needs, checked before anything is mutated
    fn check_commit(&self, mv: Move) -> MoveResult<()> {
        let violation = |message: String| MoveError::EngineInvariantViolation { message };

        if let Some(outcome) = self.outcome() {
            return Err(violation(format!("game already decided: {}", outcome.message())));
        }
        let mover = self
            .board
            .piece_at(mv.origin)
            .ok_or_else(|| violation(format!("no piece at origin {} at commit time", mv.origin)))?;
        if !self.turn.is_turn_of(mover.color) {
            return Err(violation(format!(
                "{} piece at {} committed in round {}",
                mover.color,
                mv.origin,
                self.turn.round()
            )));
        }
        if !possible_moves_for(mover, &self.board).contains(&mv.destination) {
            return Err(violation(format!(
                "{} -> {} is not a legal {:?} move",
                mv.origin, mv.destination, mover.kind
            )));
        }

        match (mv.is_capture, self.board.piece_at(mv.destination)) {
            (true, None) => Err(violation(format!(
                "capture flagged but no occupant at {} at commit time",
                mv.destination
            ))),
            (true, Some(target)) if !can_capture(mover, target, &self.board) => Err(violation(
                format!("capture target at {} cannot be taken", mv.destination),
            )),
            (false, Some(_)) => Err(violation(format!(
                "destination {} became occupied before commit",
                mv.destination
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::PieceKind;

    fn p(row: i8, column: i8) -> Position {
        Position::new(row, column)
    }

    fn executor(pieces: &[(PieceKind, Color, (i8, i8))], round: u32) -> MoveExecutor {
        let mut board = BoardState::new();
        for &(kind, color, pos) in pieces {
            board.place_piece(kind, color, pos.into(), 0).unwrap();
        }
        MoveExecutor::new(
            board,
            TurnController::with_round(round),
            CapturedPieces::default(),
            AnimationQueue::default(),
            BoardLayout::default(),
        )
    }

    #[test]
    fn test_no_piece_at_origin() {
        let mut exec = executor(&[], 1);
        assert_eq!(
            exec.propose_move(Color::White, p(1, 4), p(2, 4)),
            Err(MoveError::NoPieceAtOrigin { position: p(1, 4) })
        );
    }

    #[test]
    fn test_owner_must_match_piece() {
        let mut exec = executor(&[(PieceKind::Pawn, Color::White, (1, 4))], 1);
        assert!(matches!(
            exec.propose_move(Color::Black, p(1, 4), p(2, 4)),
            Err(MoveError::NotYourTurn { color: Color::White, round: 1 })
        ));
    }

    #[test]
    fn test_illegal_destination_leaves_board_unchanged() {
        let mut exec = executor(&[(PieceKind::Knight, Color::White, (0, 1))], 1);
        assert_eq!(
            exec.propose_move(Color::White, p(0, 1), p(1, 1)),
            Err(MoveError::IllegalDestination { from: p(0, 1), to: p(1, 1) })
        );
        assert_eq!(exec.turn().round(), 1);
        assert_eq!(exec.board().piece_at(p(0, 1)).unwrap().move_count, 0);
        assert!(exec.history().is_empty());
    }

    #[test]
    fn test_quiet_move_updates_everything() {
        let mut exec = executor(&[(PieceKind::Knight, Color::White, (0, 1))], 1);
        let events = exec.subscribe();

        let outcome = exec.propose_move(Color::White, p(0, 1), p(2, 2)).unwrap();

        assert!(!outcome.mv.is_capture);
        assert_eq!(outcome.round, 2);
        assert_eq!(outcome.game_over, None);
        let knight = exec.board().piece_at(p(2, 2)).unwrap();
        assert_eq!(knight.id, outcome.piece);
        assert_eq!(knight.move_count, 1);
        assert!(exec.board().is_empty(p(0, 1)));
        assert!(exec.animation().is_animating(outcome.piece));
        assert_eq!(
            exec.animation().target_of(outcome.piece),
            Some(BoardLayout::default().to_visual(p(2, 2)))
        );

        let event = events.try_recv().unwrap();
        assert_eq!(event.piece, outcome.piece);
        assert_eq!(event.to, p(2, 2));
        assert_eq!(event.round, 2);
    }

    #[test]
    fn test_capture_moves_piece_to_dead_pile() {
        let mut exec = executor(
            &[
                (PieceKind::Bishop, Color::Black, (7, 2)),
                (PieceKind::Pawn, Color::White, (4, 5)),
            ],
            2,
        );

        let outcome = exec.propose_move(Color::Black, p(7, 2), p(4, 5)).unwrap();

        assert!(outcome.mv.is_capture);
        let captured = outcome.captured.unwrap();
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert!(!captured.alive);
        assert_eq!(exec.dead_pile().black_captured.len(), 1);
        assert_eq!(exec.board().len(), 1);
        assert_eq!(exec.board().piece_at(p(4, 5)).unwrap().color, Color::Black);
        assert_eq!(exec.history().last_move().unwrap().captured, Some(PieceKind::Pawn));
    }

    #[test]
    fn test_stale_capture_is_invariant_violation() {
        //! A capture validated against one board and committed against another aborts untouched
        let mut exec = executor(&[(PieceKind::Rook, Color::White, (0, 0))], 1);
        let stale = Move {
            origin: p(0, 0),
            destination: p(0, 5),
            is_capture: true,
        };

        let err = exec.commit(stale).unwrap_err();
        assert!(matches!(err, MoveError::EngineInvariantViolation { .. }));
        assert!(err.is_fatal());
        assert_eq!(exec.board().piece_at(p(0, 0)).unwrap().move_count, 0);
        assert_eq!(exec.turn().round(), 1);
    }

    #[test]
    fn test_commit_out_of_turn_is_refused() {
        //! A hand-built move for Black in round 1 never reaches the board
        let mut exec = executor(&[(PieceKind::Pawn, Color::Black, (6, 0))], 1);
        let out_of_turn = Move {
            origin: p(6, 0),
            destination: p(5, 0),
            is_capture: false,
        };

        let err = exec.commit(out_of_turn).unwrap_err();
        assert!(matches!(err, MoveError::EngineInvariantViolation { .. }));
        assert_eq!(exec.turn().round(), 1);
        assert!(exec.board().is_empty(p(5, 0)));
        assert!(exec.history().is_empty());
    }

    #[test]
    fn test_commit_illegal_destination_is_refused() {
        //! Teleporting a piece across the board is fatal even on its own turn
        let mut exec = executor(&[(PieceKind::Pawn, Color::Black, (6, 0))], 2);
        let teleport = Move {
            origin: p(6, 0),
            destination: p(0, 7),
            is_capture: false,
        };

        assert!(exec.commit(teleport).unwrap_err().is_fatal());
        assert_eq!(exec.board().piece_at(p(6, 0)).map(|pc| pc.move_count), Some(0));
        assert!(exec.board().is_empty(p(0, 7)));
        assert_eq!(exec.turn().round(), 2);
    }

    #[test]
    fn test_commit_accepts_validated_move() {
        let mut exec = executor(&[(PieceKind::Pawn, Color::White, (1, 0))], 1);
        let mv = exec.validate(Color::White, p(1, 0), p(3, 0)).unwrap();
        assert_eq!(exec.commit(mv).unwrap().round, 2);
    }

    #[test]
    fn test_stale_quiet_move_onto_occupied_cell() {
        let mut exec = executor(
            &[
                (PieceKind::Rook, Color::White, (0, 0)),
                (PieceKind::Pawn, Color::Black, (0, 5)),
            ],
            1,
        );
        let stale = Move {
            origin: p(0, 0),
            destination: p(0, 5),
            is_capture: false,
        };
        assert!(exec.commit(stale).unwrap_err().is_fatal());
        assert_eq!(exec.board().len(), 2);
    }

    #[test]
    fn test_king_capture_ends_game() {
        let mut exec = executor(
            &[
                (PieceKind::King, Color::White, (0, 4)),
                (PieceKind::King, Color::Black, (7, 4)),
                (PieceKind::Queen, Color::White, (6, 4)),
            ],
            1,
        );

        let outcome = exec.propose_move(Color::White, p(6, 4), p(7, 4)).unwrap();
        assert_eq!(outcome.game_over, Some(GameOutcome::WhiteWon));
        assert_eq!(exec.board().king_position(Color::Black), Some(Position::SENTINEL));
        assert_eq!(exec.outcome(), Some(GameOutcome::WhiteWon));

        assert_eq!(
            exec.propose_move(Color::Black, p(0, 4), p(1, 4)),
            Err(MoveError::GameOver),
            "No moves after a king is captured"
        );
    }

    #[test]
    fn test_king_move_updates_tracking() {
        let mut exec = executor(&[(PieceKind::King, Color::White, (0, 4))], 1);
        exec.propose_move(Color::White, p(0, 4), p(1, 5)).unwrap();
        assert_eq!(exec.board().king_position(Color::White), Some(p(1, 5)));
    }

    #[test]
    fn test_possible_moves_at_empty_square() {
        let exec = executor(&[], 1);
        assert!(exec.possible_moves_at(p(3, 3)).is_empty());
    }
}
