use tracing::debug;

use crate::core::Piece;
use crate::engine::Engine;

impl Engine {
    /// Replace the active piece with a fresh random one at its spawn position.
    ///
    /// If any spawn cell is already occupied the new piece is still shown,
    /// then the game ends. Returns whether the piece spawned clear.
    pub fn spawn(&self) -> bool {
        let mut active = self.active.lock();
        let kind = self.source.lock().next_kind();
        let piece = Piece::spawn(kind);

        let board = self.board.lock();
        let blocked = piece
            .blocks
            .iter()
            .any(|b| board.is_occupied(b.x, b.y));
        *active = Some(piece);
        drop(board);
        drop(active);

        debug!(kind = kind.as_str(), blocked, "spawned piece");
        self.render();
        if blocked {
            self.enter_game_over();
        }
        !blocked
    }
}
