use std::io;

use thiserror::Error;

/// Conditions that make the environment unusable. The process reports
/// these and exits; nothing retries.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("window is {width}x{height}, need at least {min_width}x{min_height}")]
    ViewportTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("failed to start {name} thread: {source}")]
    SpawnThread {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to install interrupt handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),

    #[error("terminal unavailable: {0}")]
    Terminal(#[from] io::Error),
}
