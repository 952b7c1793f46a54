//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation: pixel buffers and their Braille
//! rasterization, textures and hitboxes, the object model, and the
//! mask-overlap collision engine. It has **no dependencies** on the terminal,
//! audio or image decoding, which makes it:
//!
//! - **Deterministic**: the same objects and deltas always produce the same
//!   events, in the same order
//! - **Testable**: every rule can be exercised without a terminal
//! - **Portable**: the frame output is plain `String` rows
//!
//! # Module Structure
//!
//! - [`braille`]: 2x4 pixel cells to Braille glyphs
//! - [`canvas`]: per-frame pixel buffer, camera and viewport
//! - [`texture`]: immutable pixel data + opacity masks, and the texture registry
//! - [`hitbox`]: binary collision masks
//! - [`sprite`]: texture references with an optional animation cursor
//! - [`object`]: game entities and the per-kind capability table
//! - [`manager`]: keyed collection of live objects
//! - [`factory`]: bullet and explosion factories
//! - [`physics`]: pairwise mask overlap and the collision registry
//! - [`event`]: events produced during a frame
//! - [`config`]: the game configuration document
//!
//! # Example
//!
//! ```
//! use tui_shooter_core::{rasterize, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(4, 4);
//! buffer.set(0, 0, 1);
//! buffer.set(3, 3, 1);
//!
//! let rows = rasterize(&buffer, false);
//! assert_eq!(rows, vec!["\u{2801}\u{2880}".to_string()]);
//! ```

pub mod braille;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod factory;
pub mod hitbox;
pub mod manager;
pub mod object;
pub mod physics;
pub mod sprite;
pub mod texture;

pub use tui_shooter_types as types;

// Re-export commonly used types for convenience
pub use braille::{braille_glyph, rasterize, rasterize_window};
pub use canvas::{Camera, Canvas, PixelBuffer, Viewport};
pub use config::{GameConfig, TextureSpec};
pub use error::GameError;
pub use event::{ContactPoint, Event};
pub use factory::{BulletFactory, ExplosionFactory};
pub use hitbox::Hitbox;
pub use manager::ObjectManager;
pub use object::{capabilities, Body, Capabilities, Object, ObjectId, Rect};
pub use physics::{collide, collide_masks, CollisionEngine, CollisionRegistry};
pub use sprite::{Animation, AnimationMode, Sprite};
pub use texture::{Texture, TextureRegistry};
