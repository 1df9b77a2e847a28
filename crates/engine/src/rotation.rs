use tracing::debug;

use crate::engine::Engine;

impl Engine {
    /// Rotate the active piece clockwise about its pivot.
    ///
    /// All-or-nothing: if any rotated block leaves the board sideways, sinks
    /// below the floor or lands on a settled cell, nothing changes. Blocks
    /// above the board are not checked for occupancy. Returns whether the
    /// piece rotated.
    pub fn rotate(&self) -> bool {
        let mut active = self.active.lock();
        let Some(piece) = active.as_mut() else {
            return false;
        };
        let Some(candidate) = piece.rotated() else {
            return false;
        };

        let board = self.board.lock();
        if !board.admits_all(&candidate) {
            drop(board);
            drop(active);
            debug!("rotation blocked");
            return false;
        }
        piece.blocks = candidate;
        drop(board);
        drop(active);

        self.render();
        true
    }
}
