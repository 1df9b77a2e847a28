//! Crossterm-backed input source.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads key presses from the terminal.
///
/// Only `Press` events count; terminal auto-repeat and key releases are
/// dropped so each physical press maps to one action.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_action(&mut self, timeout: Duration) -> io::Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
