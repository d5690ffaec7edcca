//! # Polygon
//!
//! Convex planar polygon with splitting support. Vertices wind
//! counter-clockwise when viewed from the side the plane normal points to.

use crate::error::CsgError;
use crate::plane::{Classification, Plane};
use crate::vertex::Vertex;
use config::constants::CONVEXITY_EPSILON;
use glam::DMat4;

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with associated plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices, deriving the plane from the first three.
    ///
    /// # Errors
    ///
    /// Returns [`CsgError::DegeneratePolygon`] when fewer than three vertices
    /// are given or the first three are collinear.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, CsgError> {
        if vertices.len() < 3 {
            return Err(CsgError::degenerate_polygon(format!(
                "expected at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        let plane = Plane::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos)
            .ok_or_else(|| CsgError::degenerate_polygon("leading vertices are collinear"))?;
        Ok(Self { vertices, plane })
    }

    /// Create polygon with a known plane.
    ///
    /// Used for split fragments, which keep the plane of their parent.
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Checks that every corner turns the same way as the plane normal.
    ///
    /// A corner fails when `(pos - prev) x (next - pos)` projected on the
    /// normal is below `-tolerance`.
    pub fn is_convex_within(&self, tolerance: f64) -> bool {
        self.first_concave_corner(tolerance).is_none()
    }

    /// Validates convexity with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`CsgError::NonConvexPolygon`] naming the offending corner.
    pub fn check_if_convex(&self) -> Result<(), CsgError> {
        self.check_convex_within(CONVEXITY_EPSILON)
    }

    /// Validates convexity with an explicit tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`CsgError::NonConvexPolygon`] naming the offending corner.
    pub fn check_convex_within(&self, tolerance: f64) -> Result<(), CsgError> {
        match self.first_concave_corner(tolerance) {
            Some(corner) => Err(CsgError::NonConvexPolygon { corner }),
            None => Ok(()),
        }
    }

    fn first_concave_corner(&self, tolerance: f64) -> Option<usize> {
        let n = self.vertices.len();
        (0..n).find(|&i| {
            let prev = self.vertices[(i + n - 1) % n].pos;
            let pos = self.vertices[i].pos;
            let next = self.vertices[(i + 1) % n].pos;
            (pos - prev).cross(next - pos).dot(self.plane.normal) < -tolerance
        })
    }

    /// Flip the polygon (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flip();
    }

    /// Returns a flipped copy.
    pub fn flipped(&self) -> Polygon {
        let mut copy = self.clone();
        copy.flip();
        copy
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for v in &self.vertices {
            match plane.classify_point(v.pos) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {}
            }
        }

        match (front_count > 0, back_count > 0) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split polygon by a plane.
    ///
    /// ## Parameters
    ///
    /// - `plane`: Splitting plane
    /// - `coplanar_front`: Output for coplanar polygons facing same direction
    /// - `coplanar_back`: Output for coplanar polygons facing opposite direction
    /// - `front`: Output for polygons in front of plane
    /// - `back`: Output for polygons behind plane
    pub fn split(
        &self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Classification::Front => front.push(self.clone()),
            Classification::Back => back.push(self.clone()),
            Classification::Spanning => {
                let mut front_verts = Vec::with_capacity(self.vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(self.vertices.len() + 1);
                let n = self.vertices.len();

                for i in 0..n {
                    let vi = &self.vertices[i];
                    let vj = &self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi.pos);
                    let tj = plane.classify_point(vj.pos);

                    if ti != Classification::Back {
                        front_verts.push(*vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(*vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi.pos);
                        let dj = plane.signed_distance(vj.pos);
                        let intersection = vi.lerp(vj, di / (di - dj));
                        front_verts.push(intersection);
                        back_verts.push(intersection);
                    }
                }

                if front_verts.len() >= 3 {
                    front.push(Polygon::with_plane(front_verts, self.plane));
                }
                if back_verts.len() >= 3 {
                    back.push(Polygon::with_plane(back_verts, self.plane));
                }
            }
        }
    }

    /// Applies an affine transform to every vertex and the plane.
    ///
    /// Mirroring matrices reverse the winding so the polygon keeps facing
    /// outward. Returns `None` when the matrix collapses the polygon.
    pub fn transform(&self, matrix: &DMat4) -> Option<Polygon> {
        let plane = self.plane.transform(matrix)?;
        let mut vertices: Vec<Vertex> = self.vertices.iter().map(|v| v.transform(matrix)).collect();
        if matrix.determinant() < 0.0 {
            vertices.reverse();
        }
        Some(Polygon { vertices, plane })
    }
}

// =============================================================================
// TESTS
// =============================================================================
