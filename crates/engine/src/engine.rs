//! The shared game: board, active piece and mode behind their own locks.
//!
//! # Lock order
//!
//! ```text
//! active ──▶ source      (spawn only)
//! active ──▶ board       (every operation touching both)
//! mode                   (leaf: never held while taking another lock)
//! ```
//!
//! Guards are dropped in reverse order, and every guard is dropped before
//! the surface is asked to present a frame or the thread sleeps.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::Timing;
use crate::core::{Board, GameSnapshot, Overlay, Piece, PieceSource};
use crate::surface::Surface;
use crate::types::GameMode;

pub struct Engine {
    /// `None` between committing a piece to the board and the next spawn.
    pub(crate) active: Mutex<Option<Piece>>,
    pub(crate) board: Mutex<Board>,
    pub(crate) source: Mutex<Box<dyn PieceSource>>,
    mode: Mutex<GameMode>,
    surface: Arc<dyn Surface>,
    timing: Timing,
}

impl Engine {
    /// Empty board, no active piece, mode `Paused`.
    pub fn new(
        surface: Arc<dyn Surface>,
        source: impl PieceSource + 'static,
        timing: Timing,
    ) -> Self {
        Self {
            active: Mutex::new(None),
            board: Mutex::new(Board::new()),
            source: Mutex::new(Box::new(source)),
            mode: Mutex::new(GameMode::Paused),
            surface,
            timing,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn mode(&self) -> GameMode {
        *self.mode.lock()
    }

    /// Switch mode if `current -> to` is a legal transition.
    pub fn transition(&self, to: GameMode) -> bool {
        let mut mode = self.mode.lock();
        let from = *mode;
        if !from.can_transition(to) {
            debug!(from = from.as_str(), to = to.as_str(), "transition refused");
            return false;
        }
        *mode = to;
        drop(mode);
        info!(from = from.as_str(), to = to.as_str(), "mode changed");
        true
    }

    pub(crate) fn enter_game_over(&self) {
        if self.transition(GameMode::GameOver) {
            info!("game over");
            self.render();
        }
    }

    pub fn active(&self) -> Option<Piece> {
        *self.active.lock()
    }

    /// Replace the active piece wholesale.
    pub fn set_active(&self, piece: Option<Piece>) {
        *self.active.lock() = piece;
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.board.lock().clone()
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut board = self.board.lock();
        f(&mut board)
    }

    /// Consistent view of piece, board and mode.
    pub fn snapshot(&self) -> GameSnapshot {
        let active = self.active.lock();
        let board = self.board.lock();
        let snap = GameSnapshot::capture(&board, *active, self.mode());
        drop(board);
        drop(active);
        snap
    }

    /// Present the current state.
    pub fn render(&self) {
        self.render_with(Overlay::None);
    }

    /// Present the current state with `overlay` on top.
    pub fn render_with(&self, overlay: Overlay) {
        let frame = self.snapshot().with_overlay(overlay);
        self.surface.present(&frame);
    }

    /// Empty the board and spawn a fresh piece.
    pub fn reset(&self) {
        self.board.lock().clear();
        debug!("board cleared");
        self.spawn();
    }
}
