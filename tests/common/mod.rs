//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use term_tetris::core::{GameSnapshot, Overlay};
use term_tetris::engine::{Controller, Engine, InputSource, Surface, Timing};
use term_tetris::types::{GameAction, PieceKind};

/// Surface that keeps every frame it is shown.
#[derive(Default)]
pub struct RecordingSurface {
    frames: Mutex<Vec<GameSnapshot>>,
}

impl RecordingSurface {
    pub fn frames(&self) -> Vec<GameSnapshot> {
        self.frames.lock().clone()
    }

    pub fn last(&self) -> Option<GameSnapshot> {
        self.frames.lock().last().copied()
    }

    pub fn overlays(&self) -> Vec<Overlay> {
        self.frames
            .lock()
            .iter()
            .map(|f| f.overlay)
            .filter(|o| *o != Overlay::None)
            .collect()
    }

    pub fn clear(&self) {
        self.frames.lock().clear();
    }
}

impl Surface for RecordingSurface {
    fn present(&self, frame: &GameSnapshot) {
        self.frames.lock().push(*frame);
    }
}

/// Input that replays a fixed list of actions, then reports nothing.
pub struct ScriptedInput {
    script: VecDeque<io::Result<Option<GameAction>>>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = GameAction>) -> Self {
        Self {
            script: actions.into_iter().map(|a| Ok(Some(a))).collect(),
        }
    }

    /// Fail with `err` once the actions run out.
    pub fn then_fail(mut self, err: io::Error) -> Self {
        self.script.push_back(Err(err));
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll_action(&mut self, timeout: Duration) -> io::Result<Option<GameAction>> {
        match self.script.pop_front() {
            Some(step) => step,
            None => {
                std::thread::sleep(timeout.min(Duration::from_millis(5)));
                Ok(None)
            }
        }
    }
}

/// Cycle through `kinds` forever.
pub fn cycle(kinds: &'static [PieceKind]) -> impl FnMut() -> PieceKind + Send {
    let mut next = 0;
    move || {
        let kind = kinds[next % kinds.len()];
        next += 1;
        kind
    }
}

/// Timing with no animation pauses and a gravity tick too slow to interfere.
pub fn still_timing() -> Timing {
    Timing {
        drop_interval: Duration::from_secs(3600),
        ..Timing::without_animation()
    }
}

pub fn engine_with(kinds: &'static [PieceKind], timing: Timing) -> (Arc<Engine>, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let engine = Arc::new(Engine::new(surface.clone(), cycle(kinds), timing));
    (engine, surface)
}

pub fn controller_with(
    kinds: &'static [PieceKind],
    timing: Timing,
) -> (Arc<Controller>, Arc<RecordingSurface>) {
    let (engine, surface) = engine_with(kinds, timing);
    (Arc::new(Controller::new(engine)), surface)
}
