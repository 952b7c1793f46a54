//! Game configuration document
//!
//! The configuration is a JSON file deserialized with serde. Missing optional
//! sections fall back to defaults; everything that refers to something else
//! (texture keys, collision kinds, sound names) is checked by
//! [`GameConfig::validate`] before the game is built.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::canvas::Viewport;
use crate::error::GameError;
use crate::physics::CollisionRegistry;
use crate::texture::Texture;
use crate::types::{Sound, Vec2, DEFAULT_ENEMY_FPS, DEFAULT_EXPLOSION_FPS};

/// The only camera mode there is
pub const FOLLOW_CAMERA: &str = "follow";

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub debug: bool,
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    pub textures: BTreeMap<String, TextureSpec>,
    pub objects: ObjectsConfig,
    #[serde(default = "default_collisions")]
    pub collisions: Vec<Vec<String>>,
    #[serde(default)]
    pub sounds: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    /// `[width, height]` in pixels; the height is replaced at startup
    pub size: [usize; 2],
    #[serde(default)]
    pub inverse: bool,
    #[serde(default)]
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorConfig {
    #[serde(default)]
    pub use_colors: bool,
    #[serde(default = "default_fg")]
    pub fg_color: [u8; 3],
    #[serde(default = "default_bg")]
    pub bg_color: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            use_colors: false,
            fg_color: default_fg(),
            bg_color: default_bg(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    pub mode: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: FOLLOW_CAMERA.to_string(),
        }
    }
}

/// One entry of the `textures` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TextureSpec {
    Circle { size: usize },
    Rectangle { width: usize, height: usize },
    Png { filename: PathBuf },
    Gif { filename: PathBuf },
}

impl TextureSpec {
    /// Generate the texture if it needs no file; image specs return `None`
    pub fn generate(&self) -> Option<Texture> {
        match *self {
            TextureSpec::Circle { size } => Some(Texture::from_circle(size)),
            TextureSpec::Rectangle { width, height } => Some(Texture::from_rectangle(width, height)),
            TextureSpec::Png { .. } | TextureSpec::Gif { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectsConfig {
    pub player: PlayerConfig,
    pub goal: PositionedConfig,
    #[serde(default)]
    pub block: Vec<PositionedConfig>,
    #[serde(default)]
    pub enemy: Vec<EnemyConfig>,
    pub bullet: BulletConfig,
    pub explosion: ExplosionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub start_pos: [i32; 2],
    pub speed: f64,
    pub sprite: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionedConfig {
    pub start_pos: [i32; 2],
    pub sprite: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemyConfig {
    pub start_pos: [i32; 2],
    pub sprite: String,
    #[serde(default = "default_enemy_fps")]
    pub fps: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulletConfig {
    pub speed: f64,
    pub size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplosionConfig {
    pub sprite: String,
    #[serde(default = "default_explosion_fps")]
    pub fps: u32,
}

fn default_collisions() -> Vec<Vec<String>> {
    CollisionRegistry::standard()
        .pairs()
        .iter()
        .map(|(a, b)| vec![a.to_string(), b.to_string()])
        .collect()
}

fn default_fg() -> [u8; 3] {
    [255, 255, 255]
}

fn default_bg() -> [u8; 3] {
    [0, 0, 0]
}

fn default_enemy_fps() -> u32 {
    DEFAULT_ENEMY_FPS
}

fn default_explosion_fps() -> u32 {
    DEFAULT_EXPLOSION_FPS
}

impl GameConfig {
    /// Parse and validate a configuration document
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "loaded configuration");
        Self::from_json_str(&json)
    }

    /// Check every cross reference in the document
    pub fn validate(&self) -> Result<(), GameError> {
        if self.camera.mode != FOLLOW_CAMERA {
            return Err(GameError::UnsupportedCameraMode(self.camera.mode.clone()));
        }
        if self.canvas.size[0] == 0 {
            return Err(GameError::InvalidConfig("canvas width must be positive".into()));
        }

        for (name, spec) in &self.textures {
            let degenerate = match *spec {
                TextureSpec::Circle { size } => size == 0,
                TextureSpec::Rectangle { width, height } => width == 0 || height == 0,
                TextureSpec::Png { .. } | TextureSpec::Gif { .. } => false,
            };
            if degenerate {
                return Err(GameError::InvalidConfig(format!(
                    "texture {name:?} has a zero dimension"
                )));
            }
        }

        let objects = &self.objects;
        let sprites = std::iter::once(&objects.player.sprite)
            .chain(std::iter::once(&objects.goal.sprite))
            .chain(objects.block.iter().map(|b| &b.sprite))
            .chain(objects.enemy.iter().map(|e| &e.sprite))
            .chain(std::iter::once(&objects.explosion.sprite));
        for sprite in sprites {
            if !self.textures.contains_key(sprite) {
                return Err(GameError::MissingTexture(sprite.clone()));
            }
        }

        if objects.enemy.iter().any(|e| e.fps == 0) || objects.explosion.fps == 0 {
            return Err(GameError::InvalidConfig("animation fps must be positive".into()));
        }
        if objects.bullet.size == 0 {
            return Err(GameError::InvalidConfig("bullet size must be positive".into()));
        }

        self.collision_registry()?;

        for name in self.sounds.keys() {
            if Sound::from_str(name).is_none() {
                return Err(GameError::InvalidConfig(format!("unknown sound {name:?}")));
            }
        }
        Ok(())
    }

    /// Adapt the playfield to the terminal.
    ///
    /// The canvas becomes as tall as the viewport, and the goal turns into a
    /// full-height finish line centered vertically.
    pub fn fit_to_terminal(&mut self, viewport: Viewport) -> Result<(), GameError> {
        let height = viewport.height;
        self.canvas.size[1] = height;

        let key = self.objects.goal.sprite.clone();
        match self.textures.get_mut(&key) {
            Some(TextureSpec::Rectangle { height: h, .. }) => *h = height,
            Some(_) => {
                return Err(GameError::InvalidConfig(format!(
                    "goal texture {key:?} must be a rectangle"
                )))
            }
            None => return Err(GameError::MissingTexture(key)),
        }
        self.objects.goal.start_pos[1] = (height / 2) as i32;
        let ymax = self.player_ymax().max(0);
        let player_y = &mut self.objects.player.start_pos[1];
        *player_y = (*player_y).clamp(0, ymax);
        tracing::info!(
            width = viewport.width,
            height,
            "fitted playfield to terminal"
        );
        Ok(())
    }

    pub fn collision_registry(&self) -> Result<CollisionRegistry, GameError> {
        CollisionRegistry::from_names(&self.collisions)
    }

    /// Display attribute index for rendered frames
    pub fn color_pair(&self) -> u8 {
        u8::from(self.canvas.colors.use_colors)
    }

    /// Lowest row the player may reach
    pub fn player_ymax(&self) -> i32 {
        self.canvas.size[1] as i32 - 1
    }

    /// Configured sound files; unknown names are rejected by `validate`
    pub fn sound_files(&self) -> impl Iterator<Item = (Sound, &Path)> {
        self.sounds
            .iter()
            .filter_map(|(name, path)| Sound::from_str(name).map(|s| (s, path.as_path())))
    }
}

impl PlayerConfig {
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_pos[0], self.start_pos[1])
    }
}

impl PositionedConfig {
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_pos[0], self.start_pos[1])
    }
}

impl EnemyConfig {
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_pos[0], self.start_pos[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "canvas": {"size": [200, 0]},
        "textures": {
            "ship": {"type": "circle", "size": 6},
            "line": {"type": "rectangle", "width": 2, "height": 1},
            "boom": {"type": "circle", "size": 8}
        },
        "objects": {
            "player": {"start_pos": [10, 10], "speed": 20, "sprite": "ship"},
            "goal": {"start_pos": [190, 0], "sprite": "line"},
            "bullet": {"speed": 100, "size": 4},
            "explosion": {"sprite": "boom"}
        }
    }"#;

    #[test]
    fn defaults_fill_optional_sections() {
        let config = GameConfig::from_json_str(MINIMAL).unwrap();
        assert!(!config.debug);
        assert_eq!(config.camera.mode, "follow");
        assert_eq!(config.objects.explosion.fps, DEFAULT_EXPLOSION_FPS);
        assert_eq!(config.collision_registry().unwrap(), CollisionRegistry::standard());
        assert_eq!(config.color_pair(), 0);
        assert!(config.objects.block.is_empty());
    }

    #[test]
    fn fitting_reshapes_the_goal() {
        let mut config = GameConfig::from_json_str(MINIMAL).unwrap();
        config.fit_to_terminal(Viewport::new(158, 96)).unwrap();
        assert_eq!(config.canvas.size, [200, 96]);
        assert_eq!(
            config.textures["line"],
            TextureSpec::Rectangle { width: 2, height: 96 }
        );
        assert_eq!(config.objects.goal.start_pos, [190, 48]);
        assert_eq!(config.player_ymax(), 95);
    }

    #[test]
    fn generated_specs_build_textures() {
        let spec = TextureSpec::Rectangle { width: 3, height: 2 };
        let texture = spec.generate().unwrap();
        assert_eq!((texture.width(), texture.height()), (3, 2));
        let png = TextureSpec::Png {
            filename: "ship.png".into(),
        };
        assert!(png.generate().is_none());
    }
}
