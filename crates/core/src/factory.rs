//! Factories for objects spawned while resolving events

use std::sync::Arc;

use crate::config::{BulletConfig, ExplosionConfig};
use crate::hitbox::Hitbox;
use crate::object::{Body, Object};
use crate::sprite::{AnimationMode, Sprite};
use crate::texture::{Texture, TextureRegistry};
use crate::error::GameError;
use crate::types::Vec2;

/// Round bullets sharing one generated texture
#[derive(Debug, Clone)]
pub struct BulletFactory {
    speed: f64,
    size: usize,
    texture: Arc<Texture>,
}

impl BulletFactory {
    pub fn new(config: &BulletConfig) -> Self {
        Self {
            speed: config.speed,
            size: config.size,
            texture: Arc::new(Texture::from_circle(config.size)),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Bullet centered on `pos`
    pub fn create(&self, pos: Vec2) -> Object {
        Object::new(
            pos.x,
            pos.y,
            Sprite::new(Arc::clone(&self.texture)),
            Hitbox::from_circle(self.size),
            Body::Bullet { speed: self.speed },
        )
    }
}

/// One-shot explosion animations
#[derive(Debug, Clone)]
pub struct ExplosionFactory {
    texture: Arc<Texture>,
    fps: u32,
}

impl ExplosionFactory {
    pub fn new(config: &ExplosionConfig, textures: &TextureRegistry) -> Result<Self, GameError> {
        Ok(Self {
            texture: textures.get(&config.sprite)?,
            fps: config.fps,
        })
    }

    /// Explosion centered on `pos`; it reports `AnimationEnded` when done
    pub fn create(&self, pos: Vec2) -> Object {
        let texture = Arc::clone(&self.texture);
        let hitbox = Hitbox::from_texture(&texture);
        Object::new(
            pos.x,
            pos.y,
            Sprite::animated(texture, AnimationMode::Stop, self.fps),
            hitbox,
            Body::Explosion,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;

    #[test]
    fn bullet_hitbox_matches_its_sprite() {
        let factory = BulletFactory::new(&BulletConfig { speed: 50.0, size: 4 });
        let bullet = factory.create(Vec2::new(30, 12));
        assert_eq!(bullet.kind(), Kind::Bullet);
        assert_eq!(bullet.center(), Vec2::new(30, 12));
        assert_eq!(bullet.hitbox.data(), bullet.sprite.texture().frame_mask(0));
    }

    #[test]
    fn explosion_needs_its_texture() {
        let config = ExplosionConfig {
            sprite: "boom".into(),
            fps: 10,
        };
        let registry = TextureRegistry::new();
        assert!(matches!(
            ExplosionFactory::new(&config, &registry),
            Err(GameError::MissingTexture(_))
        ));
    }
}
