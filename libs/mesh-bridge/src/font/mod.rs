//! # Vector Font
//!
//! Single-stroke Hershey simplex font covering printable ASCII.
//!
//! Glyphs are stored in their compact form ([`RawGlyph`]) and parsed into
//! stroke lists ([`Glyph`]) on demand. Coordinates are in font units: the
//! baseline is `y = 0`, capitals reach `y = 21`.

mod simplex;

use config::constants::{FONT_FIRST_CODE, FONT_STROKE_BREAK};
use glam::DVec2;

/// Compact glyph record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGlyph {
    /// Number of `x, y` pairs in `coords`, stroke breaks included.
    pub count: usize,
    /// Horizontal pen advance.
    pub advance: u8,
    /// Flattened pairs; `-1, -1` ends the current stroke.
    pub coords: &'static [i8],
}

impl RawGlyph {
    /// Splits the coordinate stream into strokes.
    pub fn parse(&self) -> Glyph {
        let mut strokes = Vec::new();
        let mut current = Vec::new();

        for pair in self.coords.chunks_exact(2).take(self.count) {
            if (pair[0], pair[1]) == FONT_STROKE_BREAK {
                if !current.is_empty() {
                    strokes.push(std::mem::take(&mut current));
                }
            } else {
                current.push(DVec2::new(f64::from(pair[0]), f64::from(pair[1])));
            }
        }
        if !current.is_empty() {
            strokes.push(current);
        }

        Glyph {
            advance: f64::from(self.advance),
            strokes,
        }
    }
}

/// A glyph as polylines plus its pen advance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    pub advance: f64,
    pub strokes: Vec<Vec<DVec2>>,
}

impl Glyph {
    /// Moves every stroke by `offset`.
    pub fn translated(mut self, offset: DVec2) -> Self {
        for point in self.strokes.iter_mut().flatten() {
            *point += offset;
        }
        self
    }
}

/// All glyphs, indexed by `code - FONT_FIRST_CODE`.
pub fn glyphs() -> &'static [RawGlyph] {
    &simplex::GLYPHS
}

/// Looks up the raw glyph for a character; `None` outside `' '..='~'`.
pub fn raw_glyph(ch: char) -> Option<&'static RawGlyph> {
    let offset = u32::from(ch).checked_sub(FONT_FIRST_CODE)?;
    simplex::GLYPHS.get(usize::try_from(offset).ok()?)
}

/// Parsed glyph for a character; `None` outside `' '..='~'`.
pub fn glyph(ch: char) -> Option<Glyph> {
    raw_glyph(ch).map(RawGlyph::parse)
}
