//! Braille rasterizer
//!
//! Each output glyph covers a 2x4 block of pixels. A set pixel contributes
//! the bit of its dot position (see [`DOT_BITS`]), and the glyph is
//! `U+2800 + value`. Partial cells at the right and bottom edges read the
//! missing pixels as unset.

use crate::canvas::PixelBuffer;
use crate::types::{BRAILLE_OFFSET, DOT_BITS, H_STEP, V_STEP};

/// Glyph for a cell value
///
/// With `inverse` set the foreground and background are swapped, i.e. the
/// glyph shows the unset dots.
#[inline]
pub fn braille_glyph(value: u8, inverse: bool) -> char {
    let value = if inverse { 255 - value } else { value };
    // 0x2800..=0x28FF is entirely assigned, so this never falls back.
    char::from_u32(BRAILLE_OFFSET + value as u32).unwrap_or(' ')
}

/// Cell value of the 2x4 block whose top-left pixel is (x0, y0),
/// reading only columns below `x_end`.
#[inline]
fn cell_value(buffer: &PixelBuffer, x0: usize, y0: usize, x_end: usize) -> u8 {
    let mut value = 0u8;
    for (dy, bits) in DOT_BITS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
            let x = x0 + dx;
            if x < x_end && buffer.get(x, y0 + dy) != 0 {
                value |= bit;
            }
        }
    }
    value
}

/// Rasterize the whole buffer, one string per row of glyphs.
///
/// The output has `ceil(height / 4)` rows of `ceil(width / 2)` glyphs.
pub fn rasterize(buffer: &PixelBuffer, inverse: bool) -> Vec<String> {
    rasterize_window(buffer, 0, buffer.width(), inverse)
}

/// Rasterize the columns `[x0, x0 + width)` of `buffer`.
///
/// The window is clipped to the buffer first, so a window that runs past the
/// right edge yields fewer glyphs per row rather than blank padding.
pub fn rasterize_window(buffer: &PixelBuffer, x0: usize, width: usize, inverse: bool) -> Vec<String> {
    let visible = buffer.width().saturating_sub(x0).min(width);
    let x_end = x0 + visible;
    let cols = visible.div_ceil(H_STEP);

    let mut rows = Vec::with_capacity(buffer.height().div_ceil(V_STEP));
    for y in (0..buffer.height()).step_by(V_STEP) {
        let mut row = String::with_capacity(cols * 3);
        for x in (x0..x_end).step_by(H_STEP) {
            row.push(braille_glyph(cell_value(buffer, x, y, x_end), inverse));
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_blank_pattern() {
        assert_eq!(braille_glyph(0, false), '\u{2800}');
        assert_eq!(braille_glyph(0, true), '\u{28FF}');
    }

    #[test]
    fn full_cell_sets_all_dots() {
        let buffer = PixelBuffer::from_rows(&["##", "##", "##", "##"]);
        assert_eq!(rasterize(&buffer, false), vec!["\u{28FF}".to_string()]);
        assert_eq!(rasterize(&buffer, true), vec!["\u{2800}".to_string()]);
    }

    #[test]
    fn window_does_not_read_past_its_right_edge() {
        // Odd window width: the column right of the window must not leak in.
        let buffer = PixelBuffer::from_rows(&[".#"]);
        let rows = rasterize_window(&buffer, 0, 1, false);
        assert_eq!(rows, vec!["\u{2800}".to_string()]);
    }

    #[test]
    fn window_offset_shifts_cells() {
        let buffer = PixelBuffer::from_rows(&["..#."]);
        let rows = rasterize_window(&buffer, 2, 2, false);
        assert_eq!(rows, vec!["\u{2801}".to_string()]);
    }

    #[test]
    fn window_past_buffer_is_empty_rows() {
        let buffer = PixelBuffer::new(4, 8);
        let rows = rasterize_window(&buffer, 10, 4, false);
        assert_eq!(rows, vec![String::new(), String::new()]);
    }
}
