//! Events produced during a frame and consumed once by the resolver.
//!
//! Events refer to objects by [`ObjectId`] handle. A handle whose object was
//! removed earlier in the same batch simply no longer resolves.

use crate::object::ObjectId;

/// Approximate contact point of a collision, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A stop-mode animation ran past its last frame
    AnimationEnded { sender: ObjectId },
    /// Hitbox masks of `collider` and `collided` overlap.
    /// `contact` is informational; the resolver places effects at the collider's center.
    Collision {
        collider: ObjectId,
        collided: ObjectId,
        contact: ContactPoint,
    },
    /// Shoot input was processed for `sender`
    PlayerShoot { sender: ObjectId },
}
