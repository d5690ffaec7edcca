//! # Text Vectorizer
//!
//! Lays out strings in the stroke font. The pen starts at the given origin,
//! moves right by each glyph's advance, and a newline returns it to the
//! line-start x one line lower.

use crate::font::{self, Glyph};
use config::constants::FONT_LINE_HEIGHT;
use glam::DVec2;
use tracing::trace;

/// Open 2D polyline.
pub type Polyline = Vec<DVec2>;

/// Strokes of one character with the pen at `(x, y)`.
///
/// Characters outside the font yield an empty glyph with zero advance.
pub fn vectorize_char(x: f64, y: f64, ch: char) -> Glyph {
    match font::glyph(ch) {
        Some(glyph) => glyph.translated(DVec2::new(x, y)),
        None => {
            trace!(code = u32::from(ch), "character has no glyph");
            Glyph::default()
        }
    }
}

/// Strokes of a whole string, in reading order.
///
/// # Example
///
/// ```rust
/// use mesh_bridge::vectorize_text;
///
/// let lines = vectorize_text(0.0, 0.0, "T");
/// assert_eq!(lines.len(), 2);
/// ```
pub fn vectorize_text(x: f64, y: f64, text: &str) -> Vec<Polyline> {
    let mut pen = DVec2::new(x, y);
    let mut polylines = Vec::new();

    for ch in text.chars() {
        if ch == '\n' {
            pen = DVec2::new(x, pen.y - FONT_LINE_HEIGHT);
            continue;
        }
        let glyph = vectorize_char(pen.x, pen.y, ch);
        pen.x += glyph.advance;
        polylines.extend(glyph.strokes);
    }

    polylines
}

/// Pen advance across the last line of `text`.
pub fn text_advance(text: &str) -> f64 {
    text.rsplit('\n')
        .next()
        .unwrap_or_default()
        .chars()
        .filter_map(font::raw_glyph)
        .map(|raw| f64::from(raw.advance))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_character_is_a_no_op() {
        let glyph = vectorize_char(5.0, 5.0, '\t');
        assert_eq!(glyph, Glyph::default());
        assert_eq!(text_advance("\t"), 0.0);
        assert!(vectorize_text(0.0, 0.0, "\t\u{7}").is_empty());
    }

    #[test]
    fn test_pen_advances_between_glyphs() {
        let a = vectorize_text(0.0, 0.0, "A");
        let ab = vectorize_text(0.0, 0.0, "AB");
        let b = vectorize_char(18.0, 0.0, 'B');

        assert_eq!(&ab[..a.len()], &a[..]);
        assert_eq!(&ab[a.len()..], &b.strokes[..]);
        assert_eq!(text_advance("AB"), 18.0 + 21.0);
    }

    #[test]
    fn test_unknown_characters_do_not_move_the_pen() {
        assert_eq!(vectorize_text(0.0, 0.0, "AéB"), vectorize_text(0.0, 0.0, "AB"));
    }

    #[test]
    fn test_newline_returns_pen() {
        let lines = vectorize_text(3.0, 0.0, "-\n-");
        assert_eq!(
            lines,
            vec![
                vec![DVec2::new(7.0, 9.0), DVec2::new(25.0, 9.0)],
                vec![DVec2::new(7.0, -21.0), DVec2::new(25.0, -21.0)],
            ]
        );
        assert_eq!(text_advance("AB\n-"), 26.0);
    }

    #[test]
    fn test_origin_offsets_strokes() {
        let moved = vectorize_text(100.0, -50.0, "I");
        assert_eq!(
            moved,
            vec![vec![DVec2::new(104.0, -29.0), DVec2::new(104.0, -50.0)]]
        );
    }
}
