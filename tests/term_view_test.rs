use tui_shooter::core::config::ColorConfig;
use tui_shooter::core::{rasterize, PixelBuffer};
use tui_shooter::term::{BrailleView, ColorScheme, Rgb, TermSize};
use tui_shooter::types::Frame;

fn frame_from(buffer: &PixelBuffer) -> Frame {
    Frame {
        rows: rasterize(buffer, false),
        ..Frame::default()
    }
}

#[test]
fn term_view_places_glyphs_cell_for_cell() {
    let buffer = PixelBuffer::from_rows(&["#.......", "........", "........", ".......#"]);
    let fb = BrailleView::default().render(&frame_from(&buffer), TermSize::new(6, 3));

    assert_eq!(fb.get(0, 0).unwrap().ch, '\u{2801}');
    assert_eq!(fb.get(3, 0).unwrap().ch, '\u{2880}');
    // Columns and rows past the frame stay blank.
    assert_eq!(fb.get(4, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(0, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_honors_the_origin() {
    let buffer = PixelBuffer::from_rows(&["##", "##", "##", "##"]);
    let mut frame = frame_from(&buffer);
    frame.origin = (2, 1);
    let fb = BrailleView::default().render(&frame, TermSize::new(4, 3));
    assert_eq!(fb.get(2, 1).unwrap().ch, '\u{28ff}');
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn term_view_colors_follow_the_configuration() {
    let colors = ColorConfig {
        use_colors: true,
        fg_color: [230, 230, 230],
        bg_color: [20, 20, 30],
    };
    let view = BrailleView::new(ColorScheme::from_config(&colors));
    let mut frame = frame_from(&PixelBuffer::new(2, 4));
    frame.color_pair = 1;

    let fb = view.render(&frame, TermSize::new(2, 1));
    let style = fb.get(1, 0).unwrap().style;
    assert_eq!(style.fg, Some(Rgb::new(230, 230, 230)));
    assert_eq!(style.bg, Some(Rgb::new(20, 20, 30)));
}

#[test]
fn term_view_status_line_is_bold() {
    let mut frame = frame_from(&PixelBuffer::new(20, 4));
    frame.status = Some("FPS: 30.00".to_string());
    let fb = BrailleView::default().render(&frame, TermSize::new(10, 1));
    assert_eq!(fb.row_text(0), "FPS: 30.00");
    assert!(fb.get(0, 0).unwrap().style.bold);
}
