//! Move notifications
//!
//! The executor publishes a [`MoveCommitted`] after every committed move.
//! Presentation and persistence collaborators subscribe to receive them over
//! unbounded channels; a subscriber that drops its receiver is pruned on the
//! next publish.

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::game::types::{Color, Piece, PieceId, PieceKind, Position};

/// Raised strictly after the board mutation for a move is complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCommitted {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub from: Position,
    pub to: Position,
    /// Piece handed to the dead pile by this move
    pub captured: Option<Piece>,
    /// Round after the move, i.e. the round now to be played
    pub round: u32,
}

/// Subscriber list for move notifications
#[derive(Debug, Default)]
pub struct MoveEventBus {
    subscribers: Vec<Sender<MoveCommitted>>,
}

impl MoveEventBus {
    pub fn subscribe(&mut self) -> Receiver<MoveCommitted> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: MoveCommitted) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        debug!(
            "[EVENTS] Published move of {} to {} subscriber(s)",
            event.piece,
            self.subscribers.len()
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
