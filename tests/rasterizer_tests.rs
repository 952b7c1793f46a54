use tui_shooter::core::{braille_glyph, rasterize, rasterize_window, Canvas, Camera, PixelBuffer};
use tui_shooter::types::DOT_BITS;

#[test]
fn single_pixel_maps_to_its_dot_bit() {
    for (row, bits) in DOT_BITS.iter().enumerate() {
        for (col, &bit) in bits.iter().enumerate() {
            let mut buffer = PixelBuffer::new(2, 4);
            buffer.set(col, row, 1);

            let normal = rasterize(&buffer, false);
            let expected = char::from_u32(0x2800 + bit as u32).unwrap();
            assert_eq!(normal, vec![expected.to_string()], "pixel ({col},{row})");

            let inverse = rasterize(&buffer, true);
            let expected = char::from_u32(0x2800 + (255 - bit) as u32).unwrap();
            assert_eq!(inverse, vec![expected.to_string()], "inverse pixel ({col},{row})");
        }
    }
}

#[test]
fn output_size_rounds_partial_cells_up() {
    for (w, h) in [(1, 1), (2, 4), (3, 5), (7, 9), (10, 8)] {
        let rows = rasterize(&PixelBuffer::new(w, h), false);
        assert_eq!(rows.len(), (h + 3) / 4, "{w}x{h}");
        for row in &rows {
            assert_eq!(row.chars().count(), (w + 1) / 2, "{w}x{h}");
        }
    }
}

#[test]
fn partial_cells_are_zero_padded() {
    let buffer = PixelBuffer::from_rows(&["###", "###", "###"]);
    let rows = rasterize(&buffer, false);
    // Left cell: 3 rows x 2 cols set; right cell: one column of 3 rows.
    let left = 0x01 | 0x02 | 0x04 | 0x08 | 0x10 | 0x20;
    let right = 0x01 | 0x02 | 0x04;
    assert_eq!(rows, vec![format!("{}{}", braille_glyph(left, false), braille_glyph(right, false))]);
}

#[test]
fn window_only_covers_the_visible_columns() {
    let mut buffer = PixelBuffer::new(20, 4);
    buffer.set(10, 0, 1);
    let rows = rasterize_window(&buffer, 10, 4, false);
    assert_eq!(rows, vec!["\u{2801}\u{2800}".to_string()]);
}

#[test]
fn canvas_view_follows_the_camera() {
    let mut canvas = Canvas::new(40, 8, 8, false);
    let mask = [1u8; 4];
    canvas.blit(20, 0, 2, 2, &mask, &mask);

    let mut camera = Camera::new(0, 100.0);
    let before = canvas.visible_rows(&camera);
    assert!(before.iter().all(|row| row.chars().all(|c| c == '\u{2800}')));

    camera.update(0.2);
    assert_eq!(camera.x, 20);
    let after = canvas.visible_rows(&camera);
    assert_eq!(after[0].chars().next(), Some(braille_glyph(0x1b, false)));
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].chars().count(), 4);
}
