//! Hitboxes - binary masks used only for collision testing

use crate::texture::{circle_contains, Texture};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hitbox {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Hitbox {
    /// Hitbox that collides with nothing
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Same disc as [`Texture::from_circle`], so visual and collision edges agree
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
            data,
        }
    }

    pub fn from_rectangle(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![1; width * height],
        }
    }

    /// Opacity mask of the base frame, thresholded at > 0.
    ///
    /// Animated textures are not merged across frames.
    pub fn from_texture(texture: &Texture) -> Self {
        Self {
            width: texture.width(),
            height: texture.height(),
            data: texture
                .frame_mask(0)
                .iter()
                .map(|&m| u8::from(m > 0))
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }
}
