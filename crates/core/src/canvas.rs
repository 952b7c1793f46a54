//! Canvas module - the per-frame pixel buffer
//!
//! The canvas is wider than the terminal: the whole level is drawn into it and
//! the camera selects which columns are rasterized. Coordinates are (x, y)
//! with x growing to the right and y growing downwards, origin top-left.

use crate::braille::rasterize_window;
use crate::types::{H_STEP, V_STEP};

/// Row-major grid of 0/1 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zeroed buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Build a buffer from text rows, `#` marking a set pixel.
    ///
    /// Rows shorter than the widest one are padded with unset pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut buffer = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    buffer.set(x, y, 1);
                }
            }
        }
        buffer
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at (x, y); anything outside the buffer reads as 0
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y * self.width + x]
    }

    /// Set pixel at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] = value;
        true
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }
}

/// Terminal playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Pixel size of a terminal of `cols` x `rows` characters.
    ///
    /// The last column is left free so that writing a full row never wraps
    /// the cursor.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: (cols as usize).saturating_sub(1) * H_STEP,
            height: rows as usize * V_STEP,
        }
    }
}

/// Horizontal scroll offset into the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: i32,
    pub speed: f64,
}

impl Camera {
    pub fn new(x: i32, speed: f64) -> Self {
        Self { x, speed }
    }

    pub fn update(&mut self, delta: f64) {
        self.x += (self.speed * delta).round() as i32;
    }
}

/// Frame buffer plus presentation settings
#[derive(Debug, Clone)]
pub struct Canvas {
    frame: PixelBuffer,
    view_width: usize,
    inverse: bool,
}

impl Canvas {
    pub fn new(width: usize, height: usize, view_width: usize, inverse: bool) -> Self {
        tracing::info!(width, height, "creating canvas");
        tracing::info!(view_width, "visible area in the terminal");
        Self {
            frame: PixelBuffer::new(width, height),
            view_width,
            inverse,
        }
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn view_width(&self) -> usize {
        self.view_width
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut PixelBuffer {
        &mut self.frame
    }

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Copy `data` into the canvas wherever `mask` is set.
    ///
    /// `mask` and `data` are `w x h` row-major slices whose top-left lands on
    /// (x, y). The source is clipped against all four canvas edges; a fully
    /// clipped blit writes nothing.
    pub fn blit(&mut self, x: i32, y: i32, w: usize, h: usize, mask: &[u8], data: &[u8]) {
        let cw = self.frame.width() as i64;
        let ch = self.frame.height() as i64;
        let (x, y) = (x as i64, y as i64);

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i64).min(cw);
        let y1 = (y + h as i64).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            let sy = (py - y) as usize;
            for px in x0..x1 {
                let sx = (px - x) as usize;
                let i = sy * w + sx;
                if mask[i] != 0 {
                    self.frame.set(px as usize, py as usize, data[i]);
                }
            }
        }
    }

    /// Rasterize the columns the camera currently sees
    pub fn visible_rows(&self, camera: &Camera) -> Vec<String> {
        let x0 = camera.x.max(0) as usize;
        rasterize_window(&self.frame, x0, self.view_width, self.inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_zero() {
        let buffer = PixelBuffer::from_rows(&["##", "##"]);
        assert_eq!(buffer.get(1, 1), 1);
        assert_eq!(buffer.get(2, 0), 0);
        assert_eq!(buffer.get(0, 2), 0);
    }

    #[test]
    fn blit_clips_left_and_top() {
        let mut canvas = Canvas::new(4, 4, 4, false);
        let ones = [1u8; 9];
        canvas.blit(-1, -1, 3, 3, &ones, &ones);
        assert_eq!(canvas.frame().count_set(), 4);
        assert_eq!(canvas.frame().get(1, 1), 1);
        assert_eq!(canvas.frame().get(2, 2), 0);
    }

    #[test]
    fn blit_clips_right_and_bottom() {
        let mut canvas = Canvas::new(4, 4, 4, false);
        let ones = [1u8; 9];
        canvas.blit(3, 3, 3, 3, &ones, &ones);
        assert_eq!(canvas.frame().count_set(), 1);
        assert_eq!(canvas.frame().get(3, 3), 1);
    }

    #[test]
    fn blit_fully_outside_is_noop() {
        let mut canvas = Canvas::new(4, 4, 4, false);
        let ones = [1u8; 4];
        canvas.blit(10, 0, 2, 2, &ones, &ones);
        canvas.blit(0, -5, 2, 2, &ones, &ones);
        canvas.blit(0, 0, 0, 0, &[], &[]);
        assert_eq!(canvas.frame().count_set(), 0);
    }

    #[test]
    fn blit_respects_mask() {
        let mut canvas = Canvas::new(2, 1, 2, false);
        canvas.frame_mut().set(1, 0, 1);
        canvas.blit(0, 0, 2, 1, &[1, 0], &[1, 0]);
        // Masked-out source pixel keeps the destination value.
        assert_eq!(canvas.frame().get(0, 0), 1);
        assert_eq!(canvas.frame().get(1, 0), 1);
    }

    #[test]
    fn camera_advances_by_rounded_step() {
        let mut camera = Camera::new(0, 20.0);
        camera.update(0.1);
        assert_eq!(camera.x, 2);
        camera.update(0.01);
        assert_eq!(camera.x, 2);
    }

    #[test]
    fn viewport_from_terminal_reserves_last_column() {
        let vp = Viewport::from_terminal(80, 24);
        assert_eq!(vp.width, 158);
        assert_eq!(vp.height, 96);
    }
}
