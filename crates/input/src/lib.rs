//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] and provides
//! [`TerminalInput`], the [`crate::engine::InputSource`] the controller's
//! input thread reads from.

pub mod map;
pub mod source;

pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
