//! Terminal Tetris runner (default binary).
//!
//! Wires the terminal surface and keyboard into the concurrent engine, runs
//! one session until the player quits or SIGINT arrives, then restores the
//! terminal and reports why it stopped.

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use term_tetris::engine::{Controller, Engine, ExitReason, GameConfig, StartupError};
use term_tetris::input::TerminalInput;
use term_tetris::term::{TerminalSurface, Viewport};

/// Keeps the non-blocking log writer alive until exit.
struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Send `tracing` output to `config.log_path`, if set.
///
/// Nothing is logged to the terminal: it belongs to the game.
fn setup_file_logging(config: &GameConfig) -> Result<Option<LogGuard>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let Some(path) = config.log_path.as_ref() else {
        return Ok(None);
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(Some(LogGuard { _guard: guard }))
}

fn run(config: &GameConfig) -> Result<ExitReason> {
    Viewport::current()
        .map_err(StartupError::from)?
        .ensure_fits()?;

    let surface = Arc::new(TerminalSurface::new());
    let engine = Arc::new(Engine::new(
        surface.clone(),
        config.piece_source(),
        config.timing,
    ));
    let controller = Arc::new(Controller::new(engine));

    {
        let controller = Arc::clone(&controller);
        ctrlc::set_handler(move || controller.request_quit(ExitReason::Interrupted))
            .map_err(StartupError::from)?;
    }

    surface.enter()?;
    let result = controller.run(TerminalInput::new());

    // Always try to restore terminal state.
    if let Err(err) = surface.shutdown() {
        error!(%err, "failed to restore terminal");
    }
    Ok(result?)
}

fn main() -> ExitCode {
    let config = GameConfig::from_env();
    let _log_guard = match setup_file_logging(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Tetris failed to start: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "starting");

    match run(&config) {
        Ok(reason) if reason.is_success() => {
            let _ = writeln!(std::io::stdout(), "Tetris exited: {reason}");
            ExitCode::SUCCESS
        }
        Ok(reason) => {
            let _ = writeln!(std::io::stderr(), "Tetris exited: {reason}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "startup failed");
            let _ = writeln!(std::io::stderr(), "Tetris failed to start: {err:#}");
            ExitCode::FAILURE
        }
    }
}
