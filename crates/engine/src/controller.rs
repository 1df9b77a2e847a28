//! Mode state machine and task scheduling.
//!
//! The controller owns the gravity thread (alive only while playing) and the
//! input thread (alive until quit). Both call into the shared [`Engine`];
//! neither writes the mode directly except through legal transitions.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, error, info};

use crate::core::Overlay;
use crate::engine::Engine;
use crate::error::StartupError;
use crate::surface::InputSource;
use crate::types::{Direction, GameAction, GameMode};

/// How long the input thread blocks before re-checking for quit.
pub const INPUT_POLL: Duration = Duration::from_millis(100);

/// Why the game stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit.
    Quit,
    /// SIGINT arrived.
    Interrupted,
    /// A task or the terminal failed mid-game.
    Fault(String),
}

impl ExitReason {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitReason::Quit)
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::Quit => f.write_str("player quit"),
            ExitReason::Interrupted => f.write_str("received SIGINT"),
            ExitReason::Fault(msg) => f.write_str(msg),
        }
    }
}

/// One-shot stop flag the gravity thread can sleep on.
#[derive(Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn stop(&self) {
        *self.stopped.lock() = true;
        self.wake.notify_all();
    }

    /// Sleep for `timeout` or until stopped. Returns whether it was stopped.
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.wake.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

struct GravityTask {
    stop: Arc<StopSignal>,
    handle: JoinHandle<()>,
}

pub struct Controller {
    engine: Arc<Engine>,
    gravity: Mutex<Option<GravityTask>>,
    exit: Mutex<Option<ExitReason>>,
}

impl Controller {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            gravity: Mutex::new(None),
            exit: Mutex::new(None),
        }
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn mode(&self) -> GameMode {
        self.engine.mode()
    }

    /// Whether a gravity thread is currently registered.
    pub fn is_ticking(&self) -> bool {
        self.gravity.lock().is_some()
    }

    /// Recorded exit reason; a plain quit if none was recorded.
    pub fn exit_reason(&self) -> ExitReason {
        self.exit.lock().clone().unwrap_or(ExitReason::Quit)
    }

    /// Play a game to completion.
    ///
    /// Sets up a fresh board, counts down, starts gravity, then serves input
    /// on its own thread until a quit is requested.
    pub fn run<I>(self: &Arc<Self>, input: I) -> Result<ExitReason, StartupError>
    where
        I: InputSource + 'static,
    {
        self.engine.reset();
        self.resume();

        let controller = Arc::clone(self);
        let handle = thread::Builder::new()
            .name("input".into())
            .spawn(move || controller.input_loop(input))
            .map_err(|source| StartupError::SpawnThread {
                name: "input",
                source,
            })?;

        if handle.join().is_err() {
            error!("input thread panicked");
            self.request_quit(ExitReason::Fault("input thread panicked".into()));
        }
        self.stop_gravity();

        let reason = self.exit_reason();
        info!(%reason, "controller finished");
        Ok(reason)
    }

    fn input_loop<I: InputSource>(&self, mut input: I) {
        while self.mode() != GameMode::Quitting {
            match input.poll_action(INPUT_POLL) {
                Ok(Some(action)) => self.dispatch(action),
                Ok(None) => {}
                Err(err) => {
                    error!(%err, "reading input failed");
                    self.request_quit(ExitReason::Fault(format!("input error: {err}")));
                }
            }
        }
        debug!("input loop finished");
    }

    /// Route one player action according to the current mode.
    pub fn dispatch(&self, action: GameAction) {
        match (self.mode(), action) {
            (_, GameAction::Quit) => self.request_quit(ExitReason::Quit),
            (GameMode::Playing, GameAction::MoveLeft) => {
                self.engine.move_piece(Direction::Left);
            }
            (GameMode::Playing, GameAction::MoveRight) => {
                self.engine.move_piece(Direction::Right);
            }
            (GameMode::Playing, GameAction::MoveDown) => {
                self.engine.move_piece(Direction::Down);
            }
            (GameMode::Playing, GameAction::Rotate) => {
                self.engine.rotate();
            }
            (GameMode::Playing, GameAction::HardDrop) => self.engine.hard_drop(),
            (GameMode::Playing, GameAction::TogglePause) => {
                self.pause();
            }
            (GameMode::Paused, GameAction::TogglePause) => {
                self.resume();
            }
            (GameMode::GameOver, GameAction::Confirm) => {
                self.new_game();
            }
            (mode, action) => {
                debug!(mode = mode.as_str(), action = action.as_str(), "action ignored");
            }
        }
    }

    /// Paused -> Playing: countdown, render, start gravity. No-op otherwise.
    pub fn resume(&self) -> bool {
        if self.mode() != GameMode::Paused {
            return false;
        }
        self.begin()
    }

    /// Playing -> Paused: stop gravity, then switch mode. No-op otherwise.
    ///
    /// Gravity is joined first; if its last tick ends the game, the game
    /// stays over and the pause does nothing.
    pub fn pause(&self) -> bool {
        if self.mode() != GameMode::Playing {
            return false;
        }
        self.stop_gravity();
        if !self.engine.transition(GameMode::Paused) {
            return false;
        }
        self.engine.render();
        true
    }

    /// GameOver -> Playing on a fresh board. No-op otherwise.
    pub fn new_game(&self) -> bool {
        if self.mode() != GameMode::GameOver {
            return false;
        }
        self.stop_gravity();
        self.engine.reset();
        self.begin()
    }

    /// Any mode -> Quitting. The first reason recorded wins.
    pub fn request_quit(&self, reason: ExitReason) {
        {
            let mut exit = self.exit.lock();
            if exit.is_none() {
                info!(%reason, "quit requested");
                *exit = Some(reason);
            }
        }
        self.engine.transition(GameMode::Quitting);
        self.stop_gravity();
    }

    fn begin(&self) -> bool {
        self.countdown();
        if !self.engine.transition(GameMode::Playing) {
            return false;
        }
        self.engine.render();
        if let Err(err) = self.start_gravity() {
            error!(%err, "cannot start gravity");
            self.request_quit(ExitReason::Fault(err.to_string()));
            return false;
        }
        true
    }

    fn countdown(&self) {
        let step = self.engine.timing().countdown_step;
        for digit in [3, 2, 1] {
            self.engine.render_with(Overlay::Countdown(digit));
            if !step.is_zero() {
                thread::sleep(step);
            }
        }
    }

    fn start_gravity(&self) -> Result<(), StartupError> {
        let mut slot = self.gravity.lock();
        if let Some(stale) = slot.take() {
            stale.stop.stop();
            let _ = stale.handle.join();
        }

        let stop = Arc::new(StopSignal::default());
        let signal = Arc::clone(&stop);
        let engine = Arc::clone(&self.engine);
        let handle = thread::Builder::new()
            .name("gravity".into())
            .spawn(move || gravity_loop(&engine, &signal))
            .map_err(|source| StartupError::SpawnThread {
                name: "gravity",
                source,
            })?;

        *slot = Some(GravityTask { stop, handle });
        debug!("gravity started");
        Ok(())
    }

    /// Stop the gravity thread and wait for it to exit.
    fn stop_gravity(&self) {
        let task = self.gravity.lock().take();
        if let Some(task) = task {
            task.stop.stop();
            if task.handle.join().is_err() {
                error!("gravity thread panicked");
            }
            debug!("gravity stopped");
        }
    }
}

/// Sleep out the rest of the interval, then pull the piece down one row.
fn gravity_loop(engine: &Engine, stop: &StopSignal) {
    let interval = engine.timing().drop_interval;
    let mut wait = interval;
    loop {
        if stop.wait(wait) || engine.mode() != GameMode::Playing {
            break;
        }
        let started = Instant::now();
        engine.move_piece(Direction::Down);
        wait = interval.saturating_sub(started.elapsed());
    }
}
