//! Terminal rendering for the game.
//!
//! Frames flow one way: the engine hands a [`core::GameSnapshot`] to
//! [`TerminalSurface`], [`GameView`] lays it out into a [`FrameBuffer`], and
//! [`TerminalRenderer`] writes the changed glyphs to stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
