//! Concurrent game engine.
//!
//! A single [`Engine`] owns the board and the active piece, each behind its
//! own lock, and exposes the piece operations (move, rotate, hard drop,
//! settle, spawn). A [`Controller`] drives it from two threads:
//!
//! - **gravity**: runs only while playing; sleeps out the drop interval then
//!   moves the piece down
//! - **input**: runs until quit; turns player actions into engine calls and
//!   mode transitions
//!
//! The terminal sits behind the [`Surface`] and [`InputSource`] traits so the
//! whole engine runs headless in tests.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use term_tetris_engine::{Engine, NullSurface, Timing};
//! use term_tetris_types::{Direction, GameMode, PieceKind};
//!
//! let engine = Engine::new(Arc::new(NullSurface), || PieceKind::O, Timing::without_animation());
//! engine.reset();
//! assert_eq!(engine.mode(), GameMode::Paused);
//!
//! assert!(engine.move_piece(Direction::Left));
//! engine.hard_drop();
//! assert_eq!(engine.board().occupied_count(), 4);
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
mod movement;
mod rotation;
mod settle;
mod spawn;
pub mod surface;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use config::{GameConfig, Timing};
pub use controller::{Controller, ExitReason, INPUT_POLL};
pub use engine::Engine;
pub use error::StartupError;
pub use surface::{InputSource, NullSurface, Surface};
