//! # 2D Path
//!
//! Polyline in the XY plane, optionally closed, that can be swept into a
//! solid with a rectangular cross-section.
//!
//! ## Pipeline
//!
//! 1. [`expand`]: grow the centre line into a 2D outline by half the width
//!    (segment rectangles joined by corner pieces, merged with `geo`)
//! 2. [`extrude`]: sweep the outline from `z = 0` to `z = height`
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use solid_csg::Path2D;
//!
//! let path = Path2D::new(vec![DVec2::ZERO, DVec2::new(10.0, 0.0)], false);
//! let solid = path.rectangular_extrude(1.0, 2.0, 8, false).unwrap();
//! assert!(!solid.is_empty());
//! ```

mod expand;
mod extrude;

use crate::error::CsgError;
use crate::solid::Solid;
use config::constants::clamp_corner_segments;
use glam::DVec2;
use tracing::debug;

/// Ordered 2D points with a closed flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Path2D {
    points: Vec<DVec2>,
    closed: bool,
}

impl Path2D {
    /// Creates a path.
    ///
    /// A closed path whose last point repeats its first drops the repeat.
    pub fn new(mut points: Vec<DVec2>, closed: bool) -> Self {
        if closed && points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points, closed }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sweeps a `width` × `height` rectangle along the path.
    ///
    /// ## Parameters
    ///
    /// - `width`: Cross-section width, centred on the path
    /// - `height`: Cross-section height, from `z = 0` upward
    /// - `resolution`: Facets per full turn of a rounded corner
    /// - `round`: Rounded corners and ends when true, mitred corners and
    ///   flat ends otherwise
    ///
    /// # Errors
    ///
    /// - [`CsgError::InvalidExtrusion`] for a non-positive width or height
    /// - [`CsgError::DegeneratePath`] for fewer than two points, a
    ///   non-finite point, a path that collapses to one point when corners
    ///   are mitred, or an outline lost to rounding (a path spanning many
    ///   orders of magnitude more than its width)
    pub fn rectangular_extrude(
        &self,
        width: f64,
        height: f64,
        resolution: u32,
        round: bool,
    ) -> Result<Solid, CsgError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CsgError::invalid_extrusion(format!(
                "width must be positive, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(CsgError::invalid_extrusion(format!(
                "height must be positive, got {height}"
            )));
        }
        if self.points.len() < 2 {
            return Err(CsgError::degenerate_path(format!(
                "expected at least 2 points, got {}",
                self.points.len()
            )));
        }

        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(CsgError::degenerate_path(format!(
                "point {index} is not finite: {}",
                self.points[index]
            )));
        }

        let resolution = clamp_corner_segments(resolution);
        let outline = expand::expand(&self.points, self.closed, width / 2.0, resolution, round)?;
        let solid = extrude::extrude(&outline, height);

        debug!(
            points = self.points.len(),
            closed = self.closed,
            round,
            outlines = outline.0.len(),
            polygons = solid.polygon_count(),
            "rectangular extrude"
        );
        Ok(solid)
    }
}
