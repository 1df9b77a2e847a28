//! The real terminal as an engine [`Surface`].

use anyhow::Result;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use term_tetris_engine::Surface;

struct Inner {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    active: bool,
}

/// Draws frames to stdout. Presents from both engine threads are serialized.
pub struct TerminalSurface {
    inner: Mutex<Inner>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                renderer: TerminalRenderer::new(),
                view: GameView::default(),
                fb: FrameBuffer::new(0, 0),
                active: false,
            }),
        }
    }

    /// Switch the terminal into game mode.
    pub fn enter(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.renderer.enter()?;
        inner.active = true;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn shutdown(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        if !inner.active {
            return Ok(());
        }
        inner.active = false;
        inner.renderer.exit()?;
        debug!("terminal restored");
        Ok(())
    }

    fn draw(inner: &mut Inner, frame: &GameSnapshot) -> Result<()> {
        let viewport = Viewport::current()?;
        let Inner {
            renderer, view, fb, ..
        } = inner;
        view.render_into(frame, viewport, fb);
        renderer.draw_swap(fb)
    }
}

impl Surface for TerminalSurface {
    fn present(&self, frame: &GameSnapshot) {
        let mut inner = self.inner.lock();
        if !inner.active {
            return;
        }
        if let Err(err) = Self::draw(&mut inner, frame) {
            warn!(%err, "failed to present frame");
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
