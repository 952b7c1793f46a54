//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Key`] and exposes a
//! non-blocking [`TerminalInput`] source that the frame loop polls once per
//! frame.

pub mod map;
pub mod terminal;

pub use tui_shooter_types as types;

pub use map::{handle_key_event, should_quit};
pub use terminal::TerminalInput;
