//! Sprites - a shared texture plus an optional animation cursor

use std::sync::Arc;

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::texture::Texture;

/// What happens after the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Wrap around to frame 0
    Repeat,
    /// Hold the last frame and report the end
    Stop,
}

/// Frame cursor advanced by elapsed time
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    mode: AnimationMode,
    period: f64,
    frames: usize,
    current_frame: usize,
    elapsed: f64,
    ended: bool,
}

impl Animation {
    pub fn new(mode: AnimationMode, fps: u32, frames: usize) -> Self {
        tracing::debug!(?mode, fps, frames, "new animation");
        Self {
            mode,
            period: 1.0 / fps.max(1) as f64,
            frames: frames.max(1),
            current_frame: 0,
            elapsed: 0.0,
            ended: false,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Advance by `delta` seconds.
    ///
    /// Returns `false` once a `Stop` animation has run past its last frame,
    /// and on every call after that; `true` otherwise. At most one frame is
    /// advanced per call.
    pub fn update(&mut self, delta: f64) -> bool {
        if self.ended {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed < self.period {
            return true;
        }

        self.elapsed -= self.period;
        self.current_frame += 1;
        if self.current_frame < self.frames {
            return true;
        }

        match self.mode {
            AnimationMode::Repeat => {
                self.current_frame = 0;
                true
            }
            AnimationMode::Stop => {
                self.current_frame = self.frames - 1;
                self.ended = true;
                tracing::debug!("animation ended");
                false
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Arc<Texture>,
    animation: Option<Animation>,
}

impl Sprite {
    /// Static sprite showing frame 0
    pub fn new(texture: Arc<Texture>) -> Self {
        Self {
            texture,
            animation: None,
        }
    }

    pub fn animated(texture: Arc<Texture>, mode: AnimationMode, fps: u32) -> Self {
        let frames = texture.frames();
        Self {
            texture,
            animation: Some(Animation::new(mode, fps, frames)),
        }
    }

    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn width(&self) -> usize {
        self.texture.width()
    }

    pub fn height(&self) -> usize {
        self.texture.height()
    }

    pub fn current_frame(&self) -> usize {
        self.animation.as_ref().map_or(0, Animation::current_frame)
    }

    /// Advance the animation, if any. See [`Animation::update`].
    pub fn update(&mut self, delta: f64) -> bool {
        match self.animation.as_mut() {
            Some(animation) => animation.update(delta),
            None => true,
        }
    }

    /// Draw the current frame with its top-left corner at (x, y)
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) {
        let frame = self.current_frame();
        canvas.blit(
            x,
            y,
            self.width(),
            self.height(),
            self.texture.frame_mask(frame),
            self.texture.frame_data(frame),
        );
    }
}
