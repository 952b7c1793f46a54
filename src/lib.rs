//! TUI Shooter (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_shooter::{core,engine,input,term,assets,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_shooter_assets as assets;
pub use tui_shooter_core as core;
pub use tui_shooter_engine as engine;
pub use tui_shooter_input as input;
pub use tui_shooter_term as term;
pub use tui_shooter_types as types;
