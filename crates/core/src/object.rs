//! Game objects and their per-kind capabilities
//!
//! An object is a center position, a sprite, a hitbox and a kind-specific
//! [`Body`]. Behavior is looked up in a static [`Capabilities`] table keyed
//! by [`Kind`]; kinds without an input handler simply ignore keys.

use std::sync::Arc;

use crate::canvas::Canvas;
use crate::event::Event;
use crate::hitbox::Hitbox;
use crate::sprite::{AnimationMode, Sprite};
use crate::texture::Texture;
use crate::types::{Key, Kind, Vec2, PLAYER_STEP};

/// Stable handle to an object in the [`ObjectManager`](crate::ObjectManager)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind-specific state
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Scrolls with the camera; `ymax` bounds vertical movement
    Player { speed: f64, ymax: i32 },
    Bullet { speed: f64 },
    Block,
    Enemy,
    Goal,
    Explosion,
}

impl Body {
    pub fn kind(&self) -> Kind {
        match self {
            Body::Player { .. } => Kind::Player,
            Body::Bullet { .. } => Kind::Bullet,
            Body::Block => Kind::Block,
            Body::Enemy => Kind::Enemy,
            Body::Goal => Kind::Goal,
            Body::Explosion => Kind::Explosion,
        }
    }
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// True when the two rectangles share at least one pixel
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

#[derive(Debug, Clone)]
pub struct Object {
    pub(crate) id: ObjectId,
    pub xc: i32,
    pub yc: i32,
    pub sprite: Sprite,
    pub hitbox: Hitbox,
    pub body: Body,
}

impl Object {
    pub fn new(xc: i32, yc: i32, sprite: Sprite, hitbox: Hitbox, body: Body) -> Self {
        Self {
            id: ObjectId::default(),
            xc,
            yc,
            sprite,
            hitbox,
            body,
        }
    }

    /// Player ship; the hitbox follows the texture's own mask
    pub fn player(start: Vec2, texture: Arc<Texture>, speed: f64, ymax: i32) -> Self {
        let hitbox = Hitbox::from_texture(&texture);
        Self::new(start.x, start.y, Sprite::new(texture), hitbox, Body::Player { speed, ymax })
    }

    pub fn block(start: Vec2, texture: Arc<Texture>) -> Self {
        let hitbox = Hitbox::from_rectangle(texture.width(), texture.height());
        Self::new(start.x, start.y, Sprite::new(texture), hitbox, Body::Block)
    }

    /// Enemy with a looping animation
    pub fn enemy(start: Vec2, texture: Arc<Texture>, fps: u32) -> Self {
        let hitbox = Hitbox::from_rectangle(texture.width(), texture.height());
        let sprite = Sprite::animated(texture, AnimationMode::Repeat, fps);
        Self::new(start.x, start.y, sprite, hitbox, Body::Enemy)
    }

    pub fn goal(start: Vec2, texture: Arc<Texture>) -> Self {
        let hitbox = Hitbox::from_rectangle(texture.width(), texture.height());
        Self::new(start.x, start.y, Sprite::new(texture), hitbox, Body::Goal)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.body.kind()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.xc, self.yc)
    }

    /// Left edge of the sprite
    pub fn x(&self) -> i32 {
        self.xc - (self.sprite.width() / 2) as i32
    }

    /// Top edge of the sprite
    pub fn y(&self) -> i32 {
        self.yc - (self.sprite.height() / 2) as i32
    }

    /// Where a shot leaves the ship: right edge, vertical center
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.x() + self.sprite.width() as i32, self.yc)
    }

    /// Hitbox rectangle, anchored at the sprite's top-left
    pub fn bounds(&self) -> Rect {
        Rect {
            left: self.x(),
            top: self.y(),
            width: self.hitbox.width(),
            height: self.hitbox.height(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        self.sprite.draw(canvas, self.x(), self.y());
    }

    /// Run this kind's update capability
    pub fn update(&mut self, canvas: &mut Canvas, delta: f64) -> Option<Event> {
        (capabilities(self.kind()).update)(self, canvas, delta)
    }

    /// Run this kind's input capability, if it has one
    pub fn handle_input(&mut self, key: Key) -> Option<Event> {
        capabilities(self.kind())
            .handle_input
            .and_then(|handler| handler(self, key))
    }
}

/// Per-kind behavior
pub struct Capabilities {
    /// Advance state by `delta` seconds, draw, and optionally report an event
    pub update: fn(&mut Object, &mut Canvas, f64) -> Option<Event>,
    /// React to a key press
    pub handle_input: Option<fn(&mut Object, Key) -> Option<Event>>,
}

static PLAYER: Capabilities = Capabilities {
    update: update_moving,
    handle_input: Some(player_input),
};

static BULLET: Capabilities = Capabilities {
    update: update_moving,
    handle_input: None,
};

static STATIC: Capabilities = Capabilities {
    update: update_static,
    handle_input: None,
};

static ENEMY: Capabilities = Capabilities {
    update: update_looping,
    handle_input: None,
};

static EXPLOSION: Capabilities = Capabilities {
    update: update_transient,
    handle_input: None,
};

pub fn capabilities(kind: Kind) -> &'static Capabilities {
    match kind {
        Kind::Player => &PLAYER,
        Kind::Bullet => &BULLET,
        Kind::Block | Kind::Goal => &STATIC,
        Kind::Enemy => &ENEMY,
        Kind::Explosion => &EXPLOSION,
    }
}

fn update_moving(object: &mut Object, canvas: &mut Canvas, delta: f64) -> Option<Event> {
    let speed = match object.body {
        Body::Player { speed, .. } | Body::Bullet { speed } => speed,
        _ => 0.0,
    };
    object.xc += (speed * delta).round() as i32;
    object.draw(canvas);
    None
}

fn update_static(object: &mut Object, canvas: &mut Canvas, _delta: f64) -> Option<Event> {
    object.draw(canvas);
    None
}

fn update_looping(object: &mut Object, canvas: &mut Canvas, delta: f64) -> Option<Event> {
    object.sprite.update(delta);
    object.draw(canvas);
    None
}

fn update_transient(object: &mut Object, canvas: &mut Canvas, delta: f64) -> Option<Event> {
    let running = object.sprite.update(delta);
    object.draw(canvas);
    if running {
        None
    } else {
        Some(Event::AnimationEnded { sender: object.id })
    }
}

fn player_input(object: &mut Object, key: Key) -> Option<Event> {
    let ymax = match object.body {
        Body::Player { ymax, .. } => ymax,
        _ => return None,
    };
    match key {
        Key::Up => {
            object.yc = (object.yc - PLAYER_STEP).max(0);
            None
        }
        Key::Down => {
            object.yc = (object.yc + PLAYER_STEP).min(ymax);
            None
        }
        Key::Shoot => Some(Event::PlayerShoot { sender: object.id }),
        Key::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: usize) -> Arc<Texture> {
        Arc::new(Texture::from_rectangle(side, side))
    }

    #[test]
    fn top_left_is_derived_from_center() {
        let block = Object::block(Vec2::new(10, 10), square(4));
        assert_eq!((block.x(), block.y()), (8, 8));
        assert_eq!(block.bounds().right(), 12);
    }

    #[test]
    fn muzzle_is_right_edge_center() {
        let player = Object::player(Vec2::new(10, 20), square(6), 0.0, 100);
        assert_eq!(player.muzzle(), Vec2::new(13, 20));
    }

    #[test]
    fn player_moves_within_bounds() {
        let mut player = Object::player(Vec2::new(10, 0), square(2), 0.0, 1);
        assert_eq!(player.handle_input(Key::Up), None);
        assert_eq!(player.yc, 0);
        player.handle_input(Key::Down);
        player.handle_input(Key::Down);
        assert_eq!(player.yc, 1);
    }

    #[test]
    fn player_shoot_reports_sender() {
        let mut player = Object::player(Vec2::new(10, 10), square(2), 0.0, 100);
        player.id = ObjectId(7);
        assert_eq!(
            player.handle_input(Key::Shoot),
            Some(Event::PlayerShoot { sender: ObjectId(7) })
        );
    }

    #[test]
    fn kinds_without_input_ignore_keys() {
        let mut block = Object::block(Vec2::new(10, 10), square(2));
        assert_eq!(block.handle_input(Key::Shoot), None);
        assert_eq!(block.yc, 10);
        assert!(capabilities(Kind::Block).handle_input.is_none());
        assert!(capabilities(Kind::Player).handle_input.is_some());
    }

    #[test]
    fn bullet_moves_and_draws() {
        let texture = Arc::new(Texture::from_circle(4));
        let mut bullet = Object::new(
            10,
            10,
            Sprite::new(texture),
            Hitbox::from_circle(4),
            Body::Bullet { speed: 100.0 },
        );
        let mut canvas = Canvas::new(40, 20, 40, false);
        assert_eq!(bullet.update(&mut canvas, 0.1), None);
        assert_eq!(bullet.xc, 20);
        assert!(canvas.frame().count_set() > 0);
    }

    #[test]
    fn rect_intersection_excludes_touching_edges() {
        let a = Rect { left: 0, top: 0, width: 2, height: 2 };
        let b = Rect { left: 2, top: 0, width: 2, height: 2 };
        let c = Rect { left: 1, top: 1, width: 2, height: 2 };
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }
}
