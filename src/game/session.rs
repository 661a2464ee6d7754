//! Game session - the composition root a front end drives
//!
//! A [`GameSession`] owns the [`MoveExecutor`], the persistence gateway, the
//! current [`Selection`] and the [`GameClock`]. The front end feeds it three
//! inputs:
//!
//! - [`GameSession::select_cell`] for every board click
//! - [`GameSession::tick`] once per frame
//! - [`GameSession::toggle_pause`] from its pause control
//!
//! # Selection Flow
//!
//! The first click selects a piece of the side to move and exposes its legal
//! destinations. The second click proposes a move to the clicked cell and
//! clears the selection whatever the result. Clicks while paused or after a
//! king has fallen are ignored.
//!
//! # Saving
//!
//! The snapshot is written once after start and after every committed move
//! when `autosave` is on. A failed save is logged and play continues.

use crossbeam_channel::Receiver;
use tracing::{error, info, warn};

use crate::core::settings::EngineSettings;
use crate::game::error::{GameError, GameResult, MoveError};
use crate::game::events::MoveCommitted;
use crate::game::resources::{GameClock, GameOutcome, Selection};
use crate::game::systems::{build_executor, MoveExecutor, MoveOutcome};
use crate::game::types::{PieceId, Position};
use crate::persistence::{PersistenceGateway, SavedGame};

/// Result of one board click
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Paused, game over, or nothing selectable under the cursor
    Ignored,
    /// A piece was selected; highlight these destinations
    Selected {
        piece: PieceId,
        possible_moves: Vec<Position>,
    },
    /// The selected piece was clicked again
    Cleared,
    Moved(MoveOutcome),
    /// The move was refused; the board is unchanged
    Rejected(MoveError),
}

pub struct GameSession<G: PersistenceGateway> {
    executor: MoveExecutor,
    gateway: G,
    settings: EngineSettings,
    selection: Selection,
    clock: GameClock,
    paused: bool,
}

impl<G: PersistenceGateway> GameSession<G> {
    /// Restore the stored game, or start from the bundled layout if there is none
    pub fn start(gateway: G, settings: EngineSettings) -> GameResult<Self> {
        let saved = match gateway.load()? {
            Some(saved) => {
                info!("[SESSION] Resuming saved game at round {}", saved.round);
                saved
            }
            None => {
                info!("[SESSION] No saved game, starting a new one");
                SavedGame::starting_position()?
            }
        };

        let executor = build_executor(&saved, &settings)?;
        let mut session = Self {
            executor,
            gateway,
            settings,
            selection: Selection::default(),
            clock: GameClock::default(),
            paused: false,
        };
        session.autosave();
        Ok(session)
    }

    /// Handle a click on `position`
    ///
    /// Rejected moves come back as [`SelectionOutcome::Rejected`]; only fatal
    /// engine errors are returned as `Err`, after which the session must stop.
    pub fn select_cell(&mut self, position: Position) -> GameResult<SelectionOutcome> {
        if self.paused || self.outcome().is_some() {
            return Ok(SelectionOutcome::Ignored);
        }

        let Some(origin) = self.selection.selected_position else {
            return Ok(self.select_piece(position));
        };
        self.selection.clear();

        if origin == position {
            return Ok(SelectionOutcome::Cleared);
        }

        let owner = self.executor.turn().current_color();
        match self.executor.propose_move(owner, origin, position) {
            Ok(outcome) => {
                self.autosave();
                Ok(SelectionOutcome::Moved(outcome))
            }
            Err(e) if e.is_fatal() => {
                error!("[SESSION] Fatal engine error, stopping: {}", e);
                Err(GameError::Move(e))
            }
            Err(e) => {
                warn!("[SESSION] Move rejected: {}", e);
                Ok(SelectionOutcome::Rejected(e))
            }
        }
    }

    fn select_piece(&mut self, position: Position) -> SelectionOutcome {
        let turn = self.executor.turn();
        let Some(piece) = self
            .executor
            .board()
            .piece_at(position)
            .filter(|piece| turn.is_turn_of(piece.color))
        else {
            return SelectionOutcome::Ignored;
        };

        let piece = piece.id;
        let possible_moves = self.executor.possible_moves_at(position);
        self.selection.select(piece, position, possible_moves.clone());
        info!(
            "[SESSION] Selected {} at {} ({} moves)",
            piece,
            position,
            possible_moves.len()
        );
        SelectionOutcome::Selected {
            piece,
            possible_moves,
        }
    }

    /// Advance the clock and the animations by one frame
    ///
    /// Returns the pieces whose animation finished this frame.
    pub fn tick(&mut self, delta_secs: f32) -> Vec<PieceId> {
        if self.paused {
            return Vec::new();
        }
        if self.outcome().is_none() {
            self.clock.advance(delta_secs);
        }
        let fraction = self.settings.animation_lerp_factor;
        self.executor.animation_mut().tick(fraction)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("[SESSION] {}", if self.paused { "Paused" } else { "Resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.executor.outcome()
    }

    pub fn round(&self) -> u32 {
        self.executor.turn().round()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn executor(&self) -> &MoveExecutor {
        &self.executor
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn subscribe(&mut self) -> Receiver<MoveCommitted> {
        self.executor.subscribe()
    }

    /// Current board, dead pile and round as a storable snapshot
    pub fn snapshot(&self) -> SavedGame {
        SavedGame::capture(
            self.executor.board(),
            self.executor.dead_pile(),
            self.round(),
        )
    }

    /// Write the snapshot now, reporting failure to the caller
    pub fn save(&mut self) -> GameResult<()> {
        let snapshot = self.snapshot();
        self.gateway.save(&snapshot)?;
        Ok(())
    }

    fn autosave(&mut self) {
        if !self.settings.autosave {
            return;
        }
        if let Err(e) = self.save() {
            error!("[SAVE] Failed to save game at round {}: {}", self.round(), e);
        }
    }
}
