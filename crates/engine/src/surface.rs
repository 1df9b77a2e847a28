//! Seams between the engine and the terminal.
//!
//! The engine never touches the terminal directly: it hands finished frames
//! to a [`Surface`] and pulls player actions from an [`InputSource`].

use std::io;
use std::time::Duration;

use crate::core::GameSnapshot;
use crate::types::GameAction;

/// Something that can show a frame.
///
/// Called from both the gravity and the input thread, never while the
/// engine holds its board or piece lock. Failures are the surface's to log.
pub trait Surface: Send + Sync {
    fn present(&self, frame: &GameSnapshot);
}

/// Source of player actions.
pub trait InputSource: Send {
    /// Wait up to `timeout` for the next action. `Ok(None)` means nothing
    /// actionable arrived in time.
    fn poll_action(&mut self, timeout: Duration) -> io::Result<Option<GameAction>>;
}

/// Surface that discards every frame (headless runs, benchmarks).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn present(&self, _frame: &GameSnapshot) {}
}
