use std::thread;

use tracing::info;

use crate::core::{Board, Overlay, Piece, RowSet};
use crate::engine::Engine;

/// Result of committing the active piece.
#[derive(Debug)]
pub(crate) enum Settlement {
    /// No active piece; another task settled it first.
    Vacant,
    /// Part of the piece never entered the board.
    AboveBoard,
    /// Written to the board; `rows` are the full rows it completed.
    Placed { rows: RowSet },
}

impl Engine {
    /// Commit the active piece to the board, clear completed rows and spawn
    /// the next piece.
    pub fn settle(&self) {
        let mut active = self.active.lock();
        let mut board = self.board.lock();
        let outcome = Self::commit(&mut active, &mut board);
        drop(board);
        drop(active);
        self.finish_settle(outcome);
    }

    /// Write the piece into the board and empty the active slot.
    ///
    /// A piece with any block above the board is left untouched.
    pub(crate) fn commit(active: &mut Option<Piece>, board: &mut Board) -> Settlement {
        let Some(piece) = *active else {
            return Settlement::Vacant;
        };
        if piece.is_above_board() {
            return Settlement::AboveBoard;
        }
        board.place(&piece.blocks, piece.color);
        let rows = board.full_rows(&piece.blocks);
        *active = None;
        Settlement::Placed { rows }
    }

    pub(crate) fn finish_settle(&self, outcome: Settlement) {
        match outcome {
            Settlement::Vacant => {}
            Settlement::AboveBoard => {
                info!("piece settled above the board");
                self.render();
                self.enter_game_over();
            }
            Settlement::Placed { rows } => {
                if !rows.is_empty() {
                    self.flash_rows(&rows);
                    let cleared = self.board.lock().clear_rows(&rows);
                    info!(cleared, "lines cleared");
                }
                self.spawn();
            }
        }
    }

    /// Highlight, restore, highlight, pausing after each frame.
    fn flash_rows(&self, rows: &[u8]) {
        let lit = Overlay::flash(rows);
        let delay = self.timing().flash_delay;
        for overlay in [lit, Overlay::None, lit] {
            self.render_with(overlay);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
}
