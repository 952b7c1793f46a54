//! Engine module - the frame loop and its collaborators
//!
//! [`Game`] owns the canvas, camera, object manager and collision engine and
//! drives them through one frame at a time. Input and presentation are
//! injected through the boundary traits in `tui-shooter-types`, so a game can
//! be stepped headless in tests.

pub mod clock;
pub mod game;
pub mod profiler;
pub mod sound;

pub use clock::Clock;
pub use game::{Game, TARGET_FPS};
pub use profiler::{Profiler, STAGES};
pub use sound::SoundBoard;
