//! # Plane
//!
//! Oriented plane with point classification. Every polygon of a solid
//! carries one; the BSP tree splits space along them.

use config::constants::{EPSILON, PLANE_EPSILON};
use glam::{DMat4, DVec3};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of plane (positive side).
    Front,
    /// Behind plane (negative side).
    Back,
    /// Within `PLANE_EPSILON` of the plane.
    Coplanar,
    /// Polygon has vertices on both sides.
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by a unit normal and its distance from origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: DVec3,
    /// Distance from origin along normal.
    pub w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points, counter-clockwise when viewed from
    /// the front.
    ///
    /// Returns `None` when the points are collinear or coincident.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        let length = cross.length();
        if !length.is_finite() || length < EPSILON {
            return None;
        }
        let normal = cross / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Flip the plane (reverse normal).
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Classification::Front
        } else if dist < -PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Maps the plane through an affine transform.
    ///
    /// Three points spanning the plane are transformed and a new plane is
    /// fitted through them. For a mirroring matrix the result is flipped so
    /// that it still faces outward once the owning polygon reverses its
    /// winding. Returns `None` when the matrix collapses the plane.
    pub fn transform(&self, matrix: &DMat4) -> Option<Plane> {
        let mirror = matrix.determinant() < 0.0;

        let reference = if self.normal.x.abs() < 0.9 {
            DVec3::X
        } else {
            DVec3::Y
        };
        let origin = self.normal * self.w;
        let u = self.normal.cross(reference);
        let v = self.normal.cross(u);

        let p1 = matrix.transform_point3(origin);
        let p2 = matrix.transform_point3(origin + u);
        let p3 = matrix.transform_point3(origin + v);

        let plane = Plane::from_points(p1, p2, p3)?;
        Some(if mirror { plane.flip() } else { plane })
    }
}

// =============================================================================
// TESTS
// =============================================================================
