//! # Solid Vertex
//!
//! Polygon corner. Carries a position only; normals come from the owning
//! polygon's plane.

use glam::{DMat4, DVec3};

// =============================================================================
// VERTEX
// =============================================================================

/// Corner of a solid polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model or world space.
    pub pos: DVec3,
}

impl Vertex {
    /// Create new vertex.
    pub fn new(pos: DVec3) -> Self {
        Self { pos }
    }

    /// Linear interpolation between two vertices.
    ///
    /// ## Parameters
    ///
    /// - `other`: Target vertex
    /// - `t`: Interpolation factor (0.0 = self, 1.0 = other)
    pub fn lerp(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            pos: self.pos.lerp(other.pos, t),
        }
    }

    /// Applies an affine transform to the position.
    pub fn transform(&self, matrix: &DMat4) -> Vertex {
        Vertex {
            pos: matrix.transform_point3(self.pos),
        }
    }
}

impl From<DVec3> for Vertex {
    fn from(pos: DVec3) -> Self {
        Self::new(pos)
    }
}

// =============================================================================
// TESTS
// =============================================================================
