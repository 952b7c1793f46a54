//! Collision physics - mask overlap between registered kind pairs
//!
//! Collision consequences, for reference:
//!
//! ```text
//! bullet -- block  -> remove bullet
//! bullet -- enemy  -> remove bullet and enemy
//! player -- block  -> remove player, loss
//! player -- enemy  -> remove player, loss
//! player -- goal   -> remove player, win
//! ```
//!
//! This module only detects overlaps; the resolver applies the consequences.

use crate::error::GameError;
use crate::event::{ContactPoint, Event};
use crate::hitbox::Hitbox;
use crate::manager::ObjectManager;
use crate::object::{Object, Rect};
use crate::types::{Kind, Vec2};

/// Overlap test between two hitboxes whose top-left corners are `a_pos`
/// and `b_pos`.
///
/// Both masks are summed into an accumulator spanning the union of their
/// rectangles; the masks overlap iff some cell exceeds 1. The returned
/// contact point is the centroid of those cells. Cells are scanned in
/// row-major order, so the result is reproducible bit for bit.
pub fn collide_masks(a_pos: Vec2, a: &Hitbox, b_pos: Vec2, b: &Hitbox) -> Option<ContactPoint> {
    let ra = Rect {
        left: a_pos.x,
        top: a_pos.y,
        width: a.width(),
        height: a.height(),
    };
    let rb = Rect {
        left: b_pos.x,
        top: b_pos.y,
        width: b.width(),
        height: b.height(),
    };
    if !ra.intersects(&rb) {
        return None;
    }

    let left = ra.left.min(rb.left);
    let top = ra.top.min(rb.top);
    let width = (ra.right().max(rb.right()) - left) as usize;
    let height = (ra.bottom().max(rb.bottom()) - top) as usize;

    let mut container = vec![0u8; width * height];
    for (rect, hitbox) in [(ra, a), (rb, b)] {
        let ox = (rect.left - left) as usize;
        let oy = (rect.top - top) as usize;
        for row in 0..hitbox.height() {
            let start = (oy + row) * width + ox;
            let src = &hitbox.data()[row * hitbox.width()..(row + 1) * hitbox.width()];
            for (cell, &value) in container[start..start + hitbox.width()].iter_mut().zip(src) {
                *cell += value;
            }
        }
    }

    let mut count = 0u64;
    let mut sum_row = 0u64;
    let mut sum_col = 0u64;
    for row in 0..height {
        for col in 0..width {
            if container[row * width + col] > 1 {
                count += 1;
                sum_row += row as u64;
                sum_col += col as u64;
            }
        }
    }

    if count == 0 {
        return None;
    }
    Some(ContactPoint {
        x: left as f64 + sum_col as f64 / count as f64,
        y: top as f64 + sum_row as f64 / count as f64,
    })
}

/// Overlap test between two objects' hitboxes
pub fn collide(a: &Object, b: &Object) -> Option<ContactPoint> {
    collide_masks(
        Vec2::new(a.x(), a.y()),
        &a.hitbox,
        Vec2::new(b.x(), b.y()),
        &b.hitbox,
    )
}

/// Ordered set of (collider, collided) kind pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionRegistry {
    pairs: Vec<(Kind, Kind)>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five pairs the resolver knows how to handle
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Kind::Bullet, Kind::Block);
        registry.register(Kind::Bullet, Kind::Enemy);
        registry.register(Kind::Player, Kind::Block);
        registry.register(Kind::Player, Kind::Enemy);
        registry.register(Kind::Player, Kind::Goal);
        registry
    }

    /// Build from configuration entries such as `["Bullet", "Block"]`
    pub fn from_names(entries: &[Vec<String>]) -> Result<Self, GameError> {
        let mut registry = Self::new();
        for entry in entries {
            match entry.as_slice() {
                [a, b] => match (Kind::from_str(a), Kind::from_str(b)) {
                    (Some(a), Some(b)) => registry.register(a, b),
                    _ => return Err(GameError::MalformedCollisionPair(entry.clone())),
                },
                _ => return Err(GameError::MalformedCollisionPair(entry.clone())),
            }
        }
        Ok(registry)
    }

    pub fn register(&mut self, collider: Kind, collided: Kind) {
        if self.is_registered(collider, collided) {
            return;
        }
        tracing::info!("added collision type: {collider} -- {collided}");
        self.pairs.push((collider, collided));
    }

    pub fn is_registered(&self, collider: Kind, collided: Kind) -> bool {
        self.pairs.contains(&(collider, collided))
    }

    pub fn pairs(&self) -> &[(Kind, Kind)] {
        &self.pairs
    }
}

/// Scans the manager for overlaps between registered pairs
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    registry: CollisionRegistry,
}

impl CollisionEngine {
    pub fn new(registry: CollisionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CollisionRegistry {
        &self.registry
    }

    /// Lazily yield a `Collision` event for every overlapping pair.
    ///
    /// Order: registry pairs in registration order, then colliders and
    /// collided objects in manager order.
    pub fn update<'a>(&'a self, objects: &'a ObjectManager) -> impl Iterator<Item = Event> + 'a {
        self.registry.pairs().iter().flat_map(move |&(ka, kb)| {
            objects.of_kind(ka).iter().flat_map(move |a| {
                objects.of_kind(kb).iter().filter_map(move |b| {
                    if a.id() == b.id() {
                        return None;
                    }
                    collide(a, b).map(|contact| Event::Collision {
                        collider: a.id(),
                        collided: b.id(),
                        contact,
                    })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_boxes_collide_at_their_center() {
        let hb = Hitbox::from_rectangle(3, 3);
        let contact = collide_masks(Vec2::new(5, 5), &hb, Vec2::new(5, 5), &hb).unwrap();
        assert_eq!(contact, ContactPoint { x: 6.0, y: 6.0 });
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let hb = Hitbox::from_rectangle(2, 2);
        assert!(collide_masks(Vec2::new(0, 0), &hb, Vec2::new(2, 0), &hb).is_none());
    }

    #[test]
    fn overlapping_boxes_with_empty_cells_do_not_collide() {
        // The circle leaves row 0 and column 0 empty.
        let circle = Hitbox::from_circle(4);
        let dot = Hitbox::from_rectangle(1, 1);
        assert!(collide_masks(Vec2::new(0, 0), &circle, Vec2::new(0, 0), &dot).is_none());
        assert!(collide_masks(Vec2::new(0, 0), &circle, Vec2::new(1, 1), &dot).is_some());
    }

    #[test]
    fn empty_hitbox_never_collides() {
        let hb = Hitbox::from_rectangle(4, 4);
        assert!(collide_masks(Vec2::new(0, 0), &Hitbox::empty(), Vec2::new(0, 0), &hb).is_none());
    }

    #[test]
    fn registry_rejects_malformed_pairs() {
        let bad_len = vec![vec!["Bullet".to_string()]];
        let bad_kind = vec![vec!["Bullet".to_string(), "Wall".to_string()]];
        assert!(matches!(
            CollisionRegistry::from_names(&bad_len),
            Err(GameError::MalformedCollisionPair(_))
        ));
        assert!(matches!(
            CollisionRegistry::from_names(&bad_kind),
            Err(GameError::MalformedCollisionPair(_))
        ));
    }

    #[test]
    fn registry_deduplicates() {
        let mut registry = CollisionRegistry::standard();
        registry.register(Kind::Bullet, Kind::Block);
        assert_eq!(registry.pairs().len(), 5);
    }
}
