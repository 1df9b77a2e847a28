//! Runtime configuration, read from `TETRIS_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::core::SimpleRng;
use crate::types::{DEFAULT_COUNTDOWN_MS, DEFAULT_DROP_MS, DEFAULT_FLASH_MS};

/// Delays used by the engine and the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Period of the gravity tick.
    pub drop_interval: Duration,
    /// Pause after each of the three line-clear flash phases.
    pub flash_delay: Duration,
    /// Length of each countdown digit before play resumes.
    pub countdown_step: Duration,
}

impl Timing {
    /// Default drop interval with the flash and countdown pauses removed.
    pub fn without_animation() -> Self {
        Self {
            flash_delay: Duration::ZERO,
            countdown_step: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Keep the flash strictly shorter than one gravity tick.
    pub fn normalized(mut self) -> Self {
        if !self.drop_interval.is_zero() && self.flash_delay >= self.drop_interval {
            let clamped = self.drop_interval / 2;
            warn!(
                flash_ms = self.flash_delay.as_millis() as u64,
                drop_ms = self.drop_interval.as_millis() as u64,
                clamped_ms = clamped.as_millis() as u64,
                "flash delay must be shorter than the drop interval"
            );
            self.flash_delay = clamped;
        }
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            drop_interval: Duration::from_millis(DEFAULT_DROP_MS as u64),
            flash_delay: Duration::from_millis(DEFAULT_FLASH_MS as u64),
            countdown_step: Duration::from_millis(DEFAULT_COUNTDOWN_MS as u64),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub timing: Timing,
    /// Seed for piece selection; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Log file. Logging is off when unset since the terminal belongs to the game.
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
}

impl GameConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u32| {
            let ms = lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default as u64);
            Duration::from_millis(ms)
        };

        let timing = Timing {
            drop_interval: millis("TETRIS_DROP_MS", DEFAULT_DROP_MS),
            flash_delay: millis("TETRIS_FLASH_MS", DEFAULT_FLASH_MS),
            countdown_step: millis("TETRIS_COUNTDOWN_MS", DEFAULT_COUNTDOWN_MS),
        }
        .normalized();

        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup("TETRIS_LOG_FILTER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            timing,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn piece_source(&self) -> SimpleRng {
        match self.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_time(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}
