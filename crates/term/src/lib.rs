//! Terminal presentation module.
//!
//! Lays rasterized Braille frames out on a framebuffer of styled cells and
//! flushes them to the terminal with crossterm, redrawing only the cell runs
//! that changed.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Make layout testable without a terminal ([`BrailleView`] is pure)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_shooter_core as core;
pub use tui_shooter_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{BrailleView, ColorScheme, TermSize};
