//! Textures - immutable pixel data with an opacity mask
//!
//! Storage is frame-major: frame `f`, row `r`, column `c` lives at
//! `f * width * height + r * width + c` in both `data` and `mask`.
//! Textures are loaded once and shared through `Arc` by every sprite that
//! uses them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::GameError;
use crate::types::Vec2;

/// Inclusion test shared by the circle texture and the circle hitbox.
///
/// Center and radius are both `diameter / 2` with integer division, and the
/// comparison is strict, so the disc never touches row 0 or column 0 for
/// even diameters.
#[inline]
pub fn circle_contains(diameter: usize, col: usize, row: usize) -> bool {
    let half = (diameter / 2) as i32;
    let center = Vec2::new(half, half);
    Vec2::new(col as i32, row as i32).dist2(center) < half * half
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: usize,
    height: usize,
    frames: usize,
    data: Vec<u8>,
    mask: Vec<u8>,
}

impl Texture {
    pub fn new(
        width: usize,
        height: usize,
        frames: usize,
        data: Vec<u8>,
        mask: Vec<u8>,
    ) -> Result<Self, GameError> {
        let expected = width * height * frames;
        for actual in [data.len(), mask.len()] {
            if actual != expected || frames == 0 {
                return Err(GameError::TextureShape {
                    width,
                    height,
                    frames,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            width,
            height,
            frames,
            data,
            mask,
        })
    }

    /// Filled disc of the given diameter
    pub fn from_circle(diameter: usize) -> Self {
        let mut data = vec![0u8; diameter * diameter];
        for row in 0..diameter {
            for col in 0..diameter {
                if circle_contains(diameter, col, row) {
                    data[row * diameter + col] = 1;
                }
            }
        }
        Self {
            width: diameter,
            height: diameter,
            frames: 1,
            mask: data.clone(),
            data,
        }
    }

    /// Filled rectangle
    pub fn from_rectangle(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            frames: 1,
            data: vec![1; width * height],
            mask: vec![1; width * height],
        }
    }

    /// Zero-sized texture
    pub fn blank() -> Self {
        Self {
            width: 0,
            height: 0,
            frames: 1,
            data: Vec::new(),
            mask: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    fn frame_range(&self, frame: usize) -> std::ops::Range<usize> {
        let len = self.width * self.height;
        let frame = frame.min(self.frames - 1);
        frame * len..(frame + 1) * len
    }

    /// Pixel data of one frame (clamped to the last frame)
    pub fn frame_data(&self, frame: usize) -> &[u8] {
        &self.data[self.frame_range(frame)]
    }

    /// Opacity mask of one frame (clamped to the last frame)
    pub fn frame_mask(&self, frame: usize) -> &[u8] {
        &self.mask[self.frame_range(frame)]
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Texture: size={}x{}, frames={}>",
            self.width, self.height, self.frames
        )
    }
}

/// Named textures, built once at startup and shared read-only
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    textures: BTreeMap<String, Arc<Texture>>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture) {
        self.textures.insert(key.into(), Arc::new(texture));
    }

    pub fn get(&self, key: &str) -> Result<Arc<Texture>, GameError> {
        self.textures
            .get(key)
            .cloned()
            .ok_or_else(|| GameError::MissingTexture(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Log the registry contents
    pub fn dump(&self) {
        tracing::info!("texture registry contents:");
        for (key, texture) in &self.textures {
            tracing::info!("{key} - {texture}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_of_diameter_four() {
        let t = Texture::from_circle(4);
        #[rustfmt::skip]
        let expected = [
            0, 0, 0, 0,
            0, 1, 1, 1,
            0, 1, 1, 1,
            0, 1, 1, 1,
        ];
        assert_eq!(t.frame_mask(0), &expected);
        assert_eq!(t.frame_data(0), &expected);
    }

    #[test]
    fn shape_is_validated() {
        let err = Texture::new(2, 2, 1, vec![0; 4], vec![0; 3]).unwrap_err();
        assert!(matches!(err, GameError::TextureShape { expected: 4, actual: 3, .. }));
        assert!(Texture::new(2, 2, 0, vec![], vec![]).is_err());
    }

    #[test]
    fn frames_are_sliced_and_clamped() {
        let t = Texture::new(1, 1, 2, vec![0, 1], vec![1, 1]).unwrap();
        assert_eq!(t.frame_data(0), &[0]);
        assert_eq!(t.frame_data(1), &[1]);
        assert_eq!(t.frame_data(7), &[1]);
    }

    #[test]
    fn registry_reports_missing_key() {
        let mut registry = TextureRegistry::new();
        registry.insert("dot", Texture::from_circle(2));
        assert!(registry.get("dot").is_ok());
        assert!(matches!(
            registry.get("player"),
            Err(GameError::MissingTexture(key)) if key == "player"
        ));
    }
}
