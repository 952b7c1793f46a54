//! BrailleView: lays a rasterized [`Frame`] out on the terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::config::ColorConfig;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Frame;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl TermSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Colors used for frames with color pair 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl ColorScheme {
    /// `None` when the configuration keeps the terminal colors
    pub fn from_config(colors: &ColorConfig) -> Option<Self> {
        colors.use_colors.then(|| Self {
            fg: colors.fg_color.into(),
            bg: colors.bg_color.into(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrailleView {
    scheme: Option<ColorScheme>,
}

impl BrailleView {
    pub fn new(scheme: Option<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn style_for(&self, color_pair: u8) -> CellStyle {
        match (color_pair, self.scheme) {
            (1, Some(scheme)) => CellStyle::colored(scheme.fg, scheme.bg),
            _ => CellStyle::default(),
        }
    }

    /// Render `frame` into `fb`, resizing it to `size` first.
    ///
    /// Rows start at `frame.origin` and are clipped to the terminal. The
    /// status line, if any, is drawn in bold over the first row.
    pub fn render_into(&self, frame: &Frame, size: TermSize, fb: &mut FrameBuffer) {
        fb.resize(size.cols, size.rows);
        let style = self.style_for(frame.color_pair);
        fb.clear(Cell { ch: ' ', style });

        let (ox, oy) = frame.origin;
        for (dy, row) in frame.rows.iter().enumerate() {
            let Some(y) = u16::try_from(dy).ok().and_then(|dy| oy.checked_add(dy)) else {
                break;
            };
            if y >= size.rows {
                break;
            }
            fb.put_str(ox, y, row, style);
        }

        if let Some(status) = &frame.status {
            fb.put_str(ox, oy, status, style.bold());
        }
    }

    pub fn render(&self, frame: &Frame, size: TermSize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(size.cols, size.rows);
        self.render_into(frame, size, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> Frame {
        Frame {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            ..Frame::default()
        }
    }

    #[test]
    fn rows_are_clipped_to_the_terminal() {
        let view = BrailleView::default();
        let fb = view.render(&frame(&["\u{28ff}\u{28ff}\u{28ff}", "ab", "cd"]), TermSize::new(2, 2));
        assert_eq!(fb.row_text(0), "\u{28ff}\u{28ff}");
        assert_eq!(fb.row_text(1), "ab");
    }

    #[test]
    fn color_pair_one_uses_the_scheme() {
        let scheme = ColorScheme {
            fg: Rgb::new(1, 2, 3),
            bg: Rgb::new(4, 5, 6),
        };
        let view = BrailleView::new(Some(scheme));
        let mut f = frame(&["x"]);
        f.color_pair = 1;
        let fb = view.render(&f, TermSize::new(1, 1));
        assert_eq!(fb.get(0, 0).unwrap().style.fg, Some(Rgb::new(1, 2, 3)));

        f.color_pair = 0;
        let fb = view.render(&f, TermSize::new(1, 1));
        assert_eq!(fb.get(0, 0).unwrap().style, CellStyle::default());
    }

    #[test]
    fn status_overlays_the_first_row() {
        let view = BrailleView::default();
        let mut f = frame(&["\u{2800}\u{2800}\u{2800}\u{2800}\u{2800}"]);
        f.status = Some("FPS".into());
        let fb = view.render(&f, TermSize::new(5, 1));
        assert_eq!(fb.row_text(0), "FPS\u{2800}\u{2800}");
        assert!(fb.get(0, 0).unwrap().style.bold);
    }

    #[test]
    fn disabled_colors_yield_no_scheme() {
        assert_eq!(ColorScheme::from_config(&ColorConfig::default()), None);
    }
}
