use tracing::debug;

use crate::engine::Engine;
use crate::types::Direction;

impl Engine {
    /// Move the active piece one cell.
    ///
    /// Returns `true` while the piece is still falling, including a sideways
    /// move that was declined. Returns `false` when a downward move could not
    /// be made and the piece settled instead, or when there is no active piece.
    pub fn move_piece(&self, dir: Direction) -> bool {
        self.step(dir, true)
    }

    /// Drop the active piece until it settles.
    pub fn hard_drop(&self) {
        let mut rows = 0u32;
        while self.step(Direction::Down, false) {
            rows += 1;
        }
        debug!(rows, "hard drop");
    }

    fn step(&self, dir: Direction, render: bool) -> bool {
        let mut active = self.active.lock();
        let Some(piece) = active.as_mut() else {
            return false;
        };
        let mut board = self.board.lock();

        let candidate = piece.shifted(dir);
        if board.admits_all(&candidate) {
            piece.blocks = candidate;
            drop(board);
            drop(active);
            if render {
                self.render();
            }
            return true;
        }

        match dir {
            Direction::Left | Direction::Right => true,
            Direction::Down => {
                // Commit under the same guards so nothing moves the piece in between.
                let outcome = Self::commit(&mut active, &mut board);
                drop(board);
                drop(active);
                self.finish_settle(outcome);
                false
            }
        }
    }
}
