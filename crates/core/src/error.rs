//! Error type shared by setup and the frame loop.
//!
//! Configuration errors are raised before a run starts. Invariant violations
//! are raised from inside a frame and end the run; they always carry the
//! objects involved.

use thiserror::Error;

use crate::object::ObjectId;
use crate::types::Kind;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unsupported camera mode: {0:?} (only \"follow\" is available)")]
    UnsupportedCameraMode(String),

    #[error("texture {0:?} is not defined in the texture table")]
    MissingTexture(String),

    #[error("malformed collision pair {0:?}: expected two known kinds")]
    MalformedCollisionPair(Vec<String>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("texture shape mismatch: {width}x{height}x{frames} needs {expected} values, got {actual}")]
    TextureShape {
        width: usize,
        height: usize,
        frames: usize,
        expected: usize,
        actual: usize,
    },

    #[error("player must be unique: {existing} is already live")]
    DuplicatePlayer { existing: ObjectId },

    #[error("collision {collider_kind} {collider} -> {collided_kind} {collided} has no resolution rule")]
    UnresolvableCollision {
        collider: ObjectId,
        collider_kind: Kind,
        collided: ObjectId,
        collided_kind: Kind,
    },

    #[error("animation ended on {kind} {sender}, only explosions may end an animation")]
    UnexpectedAnimationSender { sender: ObjectId, kind: Kind },

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
