use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{InputSource, Key};

/// Non-blocking keyboard source backed by crossterm.
///
/// Each poll consumes at most one pending terminal event. Release events
/// are ignored; auto-repeat counts as a press so held keys keep moving.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let mapped = handle_key_event(key);
                tracing::debug!(code = ?key.code, ?mapped, "key event");
                Ok(mapped)
            }
            _ => Ok(None),
        }
    }
}
