//! Object manager - the live objects of a run, grouped by kind
//!
//! Objects of each kind are kept in insertion order, and kinds are traversed
//! in [`Kind::ALL`] order, so every scan over the manager is deterministic.
//! The manager is only mutated while events are being resolved; update and
//! collision passes see a stable snapshot.

use crate::canvas::Canvas;
use crate::error::GameError;
use crate::event::Event;
use crate::object::{Object, ObjectId};
use crate::types::{Key, Kind};

#[derive(Debug, Clone, Default)]
pub struct ObjectManager {
    buckets: [Vec<Object>; Kind::COUNT],
    next_id: u64,
}

impl ObjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and hand back its handle.
    ///
    /// Fails if the object is a Player and a Player is already live.
    pub fn add(&mut self, mut object: Object) -> Result<ObjectId, GameError> {
        let kind = object.kind();
        if kind == Kind::Player {
            if let Some(existing) = self.player() {
                return Err(GameError::DuplicatePlayer {
                    existing: existing.id(),
                });
            }
        }

        self.next_id += 1;
        let id = ObjectId(self.next_id);
        object.id = id;
        tracing::info!(%kind, %id, x = object.xc, y = object.yc, "adding object");
        self.buckets[kind.index()].push(object);
        Ok(id)
    }

    /// Remove an object by handle.
    ///
    /// Removing an object that is already gone returns `None`; resolution
    /// order can legitimately ask for that.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        for bucket in &mut self.buckets {
            if let Some(pos) = bucket.iter().position(|o| o.id() == id) {
                let object = bucket.remove(pos);
                tracing::info!(kind = %object.kind(), %id, "removing object");
                return Some(object);
            }
        }
        tracing::debug!(%id, "object already removed");
        None
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.traverse().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.buckets
            .iter_mut()
            .flat_map(|bucket| bucket.iter_mut())
            .find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Live objects of one kind, in insertion order
    pub fn of_kind(&self, kind: Kind) -> &[Object] {
        &self.buckets[kind.index()]
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.buckets[kind.index()].len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn player(&self) -> Option<&Object> {
        self.buckets[Kind::Player.index()].first()
    }

    /// Every live object, kind by kind
    pub fn traverse(&self) -> impl Iterator<Item = &Object> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Offer a key to every object with an input capability
    pub fn process_input(&mut self, key: Key) -> Vec<Event> {
        self.buckets
            .iter_mut()
            .flat_map(|bucket| bucket.iter_mut())
            .filter_map(|object| object.handle_input(key))
            .collect()
    }

    /// Update and draw every object, collecting the events they report
    pub fn update(&mut self, canvas: &mut Canvas, delta: f64) -> Vec<Event> {
        let mut events = Vec::new();
        for bucket in &mut self.buckets {
            for object in bucket.iter_mut() {
                if let Some(event) = object.update(canvas, delta) {
                    events.push(event);
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use crate::types::Vec2;
    use std::sync::Arc;

    fn block(x: i32) -> Object {
        Object::block(Vec2::new(x, 0), Arc::new(Texture::from_rectangle(2, 2)))
    }

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut manager = ObjectManager::new();
        let a = manager.add(block(1)).unwrap();
        let b = manager.add(block(2)).unwrap();
        assert_ne!(a, b);
        let xs: Vec<i32> = manager.of_kind(Kind::Block).iter().map(|o| o.xc).collect();
        assert_eq!(xs, vec![1, 2]);
    }

    #[test]
    fn remove_twice_is_tolerated() {
        let mut manager = ObjectManager::new();
        let id = manager.add(block(1)).unwrap();
        assert!(manager.remove(id).is_some());
        assert!(manager.remove(id).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn removal_preserves_order_of_the_rest() {
        let mut manager = ObjectManager::new();
        let _a = manager.add(block(1)).unwrap();
        let b = manager.add(block(2)).unwrap();
        let _c = manager.add(block(3)).unwrap();
        manager.remove(b);
        let xs: Vec<i32> = manager.traverse().map(|o| o.xc).collect();
        assert_eq!(xs, vec![1, 3]);
    }

    #[test]
    fn traversal_follows_kind_order() {
        let mut manager = ObjectManager::new();
        let texture = Arc::new(Texture::from_rectangle(2, 2));
        manager.add(block(1)).unwrap();
        manager
            .add(Object::player(Vec2::new(0, 0), texture, 0.0, 10))
            .unwrap();
        let kinds: Vec<Kind> = manager.traverse().map(Object::kind).collect();
        assert_eq!(kinds, vec![Kind::Player, Kind::Block]);
    }
}
