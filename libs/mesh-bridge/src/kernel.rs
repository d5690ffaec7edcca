//! # Solid Kernel
//!
//! The capabilities the bridge needs from a boolean-CSG library, and the
//! default implementation over `solid-csg`.
//!
//! The bridge never reaches for a global library handle: every [`Bridge`]
//! owns the kernel it was built with.
//!
//! [`Bridge`]: crate::Bridge

use crate::extrude::ExtrusionProfile;
use config::constants::{KernelConfig, SOLID_CLASS_TAG};
use glam::{DMat4, DVec2, DVec3};
use solid_csg::{CompactBinary, CsgError, Path2D, Polygon, Solid, Vertex};

// =============================================================================
// KERNEL TRAIT
// =============================================================================

/// Polygon-soup solid library consumed by the bridge.
pub trait SolidKernel {
    /// Convex planar polygon.
    type Polygon;
    /// Closed set of polygons.
    type Solid;
    /// Class-tagged compact record of a solid.
    type Record;
    /// Failure raised by construction, extrusion or decoding.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Class tag carried by records that encode solids.
    fn solid_class(&self) -> &str;

    /// Class tag carried by `record`.
    fn record_class<'r>(&self, record: &'r Self::Record) -> &'r str;

    /// Builds a polygon from corner positions in winding order.
    fn polygon(&self, positions: &[DVec3]) -> Result<Self::Polygon, Self::Error>;

    /// Fails when the polygon is not convex.
    fn check_convex(&self, polygon: &Self::Polygon) -> Result<(), Self::Error>;

    /// Corner positions of `polygon` in winding order.
    fn polygon_positions(&self, polygon: &Self::Polygon) -> Vec<DVec3>;

    /// Unit normal of the polygon's plane.
    fn polygon_normal(&self, polygon: &Self::Polygon) -> DVec3;

    fn solid_from_polygons(&self, polygons: Vec<Self::Polygon>) -> Self::Solid;

    fn polygons<'s>(&self, solid: &'s Self::Solid) -> &'s [Self::Polygon];

    /// Applies an affine transform; mirroring matrices keep solids outward
    /// facing. Fails when the matrix flattens any polygon.
    fn transform(
        &self,
        solid: &Self::Solid,
        matrix: &DMat4,
    ) -> Result<Self::Solid, Self::Error>;

    /// Scales uniformly about the origin.
    fn scale(&self, solid: &Self::Solid, factor: f64) -> Self::Solid;

    /// Union of any number of solids; the empty union is the empty solid.
    fn union_all(&self, solids: Vec<Self::Solid>) -> Self::Solid;

    /// Sweeps the profile's rectangle along a 2D path.
    ///
    /// Callers validate the point count and profile first.
    fn extrude_path(
        &self,
        points: &[DVec2],
        profile: &ExtrusionProfile,
    ) -> Result<Self::Solid, Self::Error>;

    fn encode(&self, solid: &Self::Solid) -> Self::Record;

    fn decode(&self, record: &Self::Record) -> Result<Self::Solid, Self::Error>;
}

// =============================================================================
// SOLID-CSG KERNEL
// =============================================================================

/// [`SolidKernel`] backed by `solid-csg`.
///
/// # Example
///
/// ```rust
/// use config::constants::KernelConfig;
/// use mesh_bridge::{CsgKernel, SolidKernel};
///
/// let kernel = CsgKernel::new(KernelConfig::new(1e-6).unwrap());
/// assert_eq!(kernel.solid_class(), "CSG");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CsgKernel {
    config: KernelConfig,
}

impl CsgKernel {
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }
}

impl SolidKernel for CsgKernel {
    type Polygon = Polygon;
    type Solid = Solid;
    type Record = CompactBinary;
    type Error = CsgError;

    fn solid_class(&self) -> &str {
        SOLID_CLASS_TAG
    }

    fn record_class<'r>(&self, record: &'r CompactBinary) -> &'r str {
        &record.class
    }

    fn polygon(&self, positions: &[DVec3]) -> Result<Polygon, CsgError> {
        Polygon::new(positions.iter().copied().map(Vertex::new).collect())
    }

    fn check_convex(&self, polygon: &Polygon) -> Result<(), CsgError> {
        polygon.check_convex_within(self.config.tolerance)
    }

    fn polygon_positions(&self, polygon: &Polygon) -> Vec<DVec3> {
        polygon.vertices().iter().map(|v| v.pos).collect()
    }

    fn polygon_normal(&self, polygon: &Polygon) -> DVec3 {
        polygon.plane().normal
    }

    fn solid_from_polygons(&self, polygons: Vec<Polygon>) -> Solid {
        Solid::from_polygons(polygons)
    }

    fn polygons<'s>(&self, solid: &'s Solid) -> &'s [Polygon] {
        solid.polygons()
    }

    fn transform(&self, solid: &Solid, matrix: &DMat4) -> Result<Solid, CsgError> {
        solid.try_transform(matrix)
    }

    fn scale(&self, solid: &Solid, factor: f64) -> Solid {
        solid.scale(factor)
    }

    fn union_all(&self, solids: Vec<Solid>) -> Solid {
        Solid::union_all(solids)
    }

    fn extrude_path(
        &self,
        points: &[DVec2],
        profile: &ExtrusionProfile,
    ) -> Result<Solid, CsgError> {
        Path2D::new(points.to_vec(), profile.closed).rectangular_extrude(
            profile.width,
            profile.height,
            profile.corner_segments,
            profile.round,
        )
    }

    fn encode(&self, solid: &Solid) -> CompactBinary {
        solid.to_compact_binary()
    }

    fn decode(&self, record: &CompactBinary) -> Result<Solid, CsgError> {
        Solid::from_compact_binary(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_polygon_normal_follows_winding() {
        let kernel = CsgKernel::default();
        let polygon = kernel.polygon(&unit_square()).unwrap();
        assert_eq!(kernel.polygon_normal(&polygon), DVec3::Z);
        assert_eq!(kernel.polygon_positions(&polygon), unit_square());
    }

    #[test]
    fn test_collinear_polygon_rejected() {
        let kernel = CsgKernel::default();
        let err = kernel
            .polygon(&[DVec3::ZERO, DVec3::X, DVec3::X * 2.0])
            .unwrap_err();
        assert!(matches!(err, CsgError::DegeneratePolygon { .. }));
    }

    #[test]
    fn test_tolerance_controls_convexity() {
        // Bottom edge sags by 1e-7, so the corner at (1, 0) turns inward
        let nearly_flat = [
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, -1e-7, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ];
        let strict = CsgKernel::default();
        let polygon = strict.polygon(&nearly_flat).unwrap();
        assert!(strict.check_convex(&polygon).is_err());

        let lenient = CsgKernel::new(KernelConfig::new(1e-3).unwrap());
        assert!(lenient.check_convex(&polygon).is_ok());
    }

    #[test]
    fn test_record_class() {
        let kernel = CsgKernel::default();
        let record = kernel.encode(&Solid::default());
        assert_eq!(kernel.record_class(&record), kernel.solid_class());
    }
}
