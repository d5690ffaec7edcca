//! # Solid
//!
//! Boundary representation of a volume as an unordered list of convex
//! polygons, with constructive solid geometry operations.
//!
//! ## Algorithm
//!
//! Booleans follow the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B)
//! - Subtract: A.invert(); union steps; A.invert()
//! - Intersect: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); A.build(B); A.invert()
//!
//! Operands whose bounding boxes do not overlap skip the trees entirely.
//!
//! ## Example
//!
//! ```rust
//! use solid_csg::Solid;
//!
//! let empty = Solid::default();
//! assert!(empty.union(&Solid::default()).is_empty());
//! ```

use crate::bsp::BspNode;
use crate::error::CsgError;
use crate::polygon::Polygon;
use glam::{DMat4, DVec3};
use tracing::{debug, warn};

// =============================================================================
// SOLID
// =============================================================================

/// A closed solid described by its boundary polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Creates a solid from boundary polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Boundary polygons in storage order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Consumes the solid, returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Number of boundary polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true when the solid has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    // =========================================================================
    // BOOLEANS
    // =========================================================================

    /// Union of two solids.
    ///
    /// ```text
    ///  +-------+            +-------+
    ///  |       |            |       |
    ///  |   A   |            |       |
    ///  |    +--+----+   =   |       +----+
    ///  +----+--+    |       +----+       |
    ///       |   B   |            |       |
    ///       |       |            |       |
    ///       +-------+            +-------+
    /// ```
    pub fn union(&self, other: &Solid) -> Solid {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() || !self.may_overlap(other) {
            return self.concat(other);
        }

        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());

        let result = Solid::from_polygons(a.all_polygons());
        debug!(
            left = self.polygon_count(),
            right = other.polygon_count(),
            result = result.polygon_count(),
            "union"
        );
        result
    }

    /// Union of many solids.
    ///
    /// Operands are merged pairwise, level by level, so every union works on
    /// inputs of similar size.
    pub fn union_all(solids: Vec<Solid>) -> Solid {
        let count = solids.len();
        let mut level = solids;
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len() / 2 + 1);
            let mut operands = level.into_iter();
            while let Some(first) = operands.next() {
                match operands.next() {
                    Some(second) => next.push(first.union(&second)),
                    None => next.push(first),
                }
            }
            level = next;
        }
        let result = level.pop().unwrap_or_default();
        debug!(operands = count, polygons = result.polygon_count(), "union_all");
        result
    }

    /// Subtracts `other` from this solid.
    ///
    /// ```text
    ///  +-------+            +-------+
    ///  |       |            |       |
    ///  |   A   |            |       |
    ///  |    +--+----+   =   |    +--+
    ///  +----+--+    |       +----+
    ///       |   B   |
    ///       |       |
    ///       +-------+
    /// ```
    pub fn subtract(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() || !self.may_overlap(other) {
            return self.clone();
        }

        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());
        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        let result = Solid::from_polygons(a.all_polygons());
        debug!(
            left = self.polygon_count(),
            right = other.polygon_count(),
            result = result.polygon_count(),
            "subtract"
        );
        result
    }

    /// Intersection of two solids.
    ///
    /// ```text
    ///  +-------+
    ///  |       |
    ///  |   A   |
    ///  |    +--+----+   =   +--+
    ///  +----+--+    |       +--+
    ///       |   B   |
    ///       |       |
    ///       +-------+
    /// ```
    pub fn intersect(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() || !self.may_overlap(other) {
            return Solid::default();
        }

        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());
        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();

        let result = Solid::from_polygons(a.all_polygons());
        debug!(
            left = self.polygon_count(),
            right = other.polygon_count(),
            result = result.polygon_count(),
            "intersect"
        );
        result
    }

    /// Swaps inside and outside.
    pub fn inverse(&self) -> Solid {
        Solid::from_polygons(self.polygons.iter().map(Polygon::flipped).collect())
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Applies an affine transform.
    ///
    /// Positions are transformed and planes recomputed; mirroring matrices
    /// reverse every polygon's winding. Polygons collapsed by a singular
    /// matrix are dropped.
    pub fn transform(&self, matrix: &DMat4) -> Solid {
        let polygons: Vec<Polygon> = self
            .polygons
            .iter()
            .filter_map(|p| p.transform(matrix))
            .collect();
        let dropped = self.polygons.len() - polygons.len();
        if dropped > 0 {
            warn!(dropped, "transform collapsed polygons");
        }
        Solid::from_polygons(polygons)
    }

    /// Applies an affine transform that must keep every polygon.
    ///
    /// # Errors
    ///
    /// [`CsgError::CollapsedTransform`] when the matrix flattens any polygon.
    pub fn try_transform(&self, matrix: &DMat4) -> Result<Solid, CsgError> {
        let polygons: Vec<Polygon> = self
            .polygons
            .iter()
            .filter_map(|p| p.transform(matrix))
            .collect();
        let collapsed = self.polygons.len() - polygons.len();
        if collapsed > 0 {
            return Err(CsgError::CollapsedTransform {
                collapsed,
                total: self.polygons.len(),
            });
        }
        Ok(Solid::from_polygons(polygons))
    }

    /// Moves the solid by `offset`.
    pub fn translate(&self, offset: DVec3) -> Solid {
        self.transform(&DMat4::from_translation(offset))
    }

    /// Scales the solid uniformly about the origin.
    pub fn scale(&self, factor: f64) -> Solid {
        self.transform(&DMat4::from_scale(DVec3::splat(factor)))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty solid.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut positions = self
            .polygons
            .iter()
            .flat_map(|p| p.vertices().iter().map(|v| v.pos));
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    fn may_overlap(&self, other: &Solid) -> bool {
        match (self.bounding_box(), other.bounding_box()) {
            (Some((a_min, a_max)), Some((b_min, b_max))) => {
                a_min.cmple(b_max).all() && b_min.cmple(a_max).all()
            }
            _ => false,
        }
    }

    fn concat(&self, other: &Solid) -> Solid {
        let mut polygons = Vec::with_capacity(self.polygons.len() + other.polygons.len());
        polygons.extend_from_slice(&self.polygons);
        polygons.extend_from_slice(&other.polygons);
        Solid::from_polygons(polygons)
    }
}

impl FromIterator<Polygon> for Solid {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Solid::from_polygons(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;
