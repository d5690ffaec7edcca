//! # Mesh/Solid Bridge
//!
//! Converts harness meshes into kernel solids and back.
//!
//! ## Conversions
//!
//! ```text
//! Geometry ─────┐
//! BufferGeometry┼──from_geometry──┐
//! MeshInstance ─┴──from_mesh──────┼──> Solid ──to_geometry──> Geometry
//! &str ────────────from_text──────┘          └──to_mesh─────> MeshInstance
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mesh_bridge::{Bridge, CsgKernel, TextStyle};
//!
//! let bridge = Bridge::builder().kernel(CsgKernel::default()).build().unwrap();
//! let solid = bridge.from_text("-", &TextStyle::default()).unwrap();
//! let geometry = bridge.to_geometry(&solid);
//! assert!(geometry.face_count() > 0);
//! ```

use crate::error::BridgeError;
use crate::extrude::{extrude, ExtrusionProfile};
use crate::kernel::{CsgKernel, SolidKernel};
use crate::mesh::{Face, FaceSource, Geometry, MeshInstance};
use crate::text::vectorize_text;
use config::constants::{
    DEFAULT_TEXT_HEIGHT, DEFAULT_TEXT_SIZE, DEFAULT_TEXT_WEIGHT, FONT_DESIGN_SIZE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// TEXT STYLE
// =============================================================================

/// Appearance of extruded text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Stroke width in font units
    pub weight: f64,
    /// Extrusion depth in font units
    pub height: f64,
    /// Output size; 20 keeps font units unscaled
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            weight: DEFAULT_TEXT_WEIGHT,
            height: DEFAULT_TEXT_HEIGHT,
            size: DEFAULT_TEXT_SIZE,
        }
    }
}

// =============================================================================
// BRIDGE
// =============================================================================

/// Mesh/solid converter bound to one kernel.
#[derive(Debug, Clone)]
pub struct Bridge<K> {
    kernel: K,
}

impl<K: SolidKernel> Bridge<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn builder() -> BridgeBuilder<K> {
        BridgeBuilder::new()
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Builds a solid with one polygon per face.
    ///
    /// Buffer layouts are materialized first; the source is not modified.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::InvalidFaceType`] for buffer faces that are neither
    ///   triangles nor quads
    /// - [`BridgeError::InvalidVertexIndex`] for out-of-range indices
    /// - [`BridgeError::InvalidPolygon`] for degenerate or non-convex faces
    pub fn from_geometry<G>(&self, geometry: &G) -> Result<K::Solid, BridgeError>
    where
        G: FaceSource + ?Sized,
    {
        let geometry = geometry.face_list()?;
        let vertices = geometry.vertices();
        let mut polygons = Vec::with_capacity(geometry.face_count());

        for (face, entry) in geometry.faces().iter().enumerate() {
            let positions = entry
                .indices
                .as_slice()
                .iter()
                .map(|&index| {
                    vertices.get(index as usize).copied().ok_or(
                        BridgeError::InvalidVertexIndex {
                            face,
                            index,
                            vertex_count: vertices.len(),
                        },
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;

            let polygon = self
                .kernel
                .polygon(&positions)
                .map_err(|e| BridgeError::invalid_polygon(face, e.to_string()))?;
            self.kernel
                .check_convex(&polygon)
                .map_err(|e| BridgeError::invalid_polygon(face, e.to_string()))?;
            polygons.push(polygon);
        }

        debug!(
            vertices = vertices.len(),
            faces = polygons.len(),
            "geometry to solid"
        );
        Ok(self.kernel.solid_from_polygons(polygons))
    }

    /// Builds a world-space solid from a placed mesh.
    ///
    /// Refreshes the instance matrix if it is stale, then applies it to the
    /// solid built from the instance geometry.
    ///
    /// # Errors
    ///
    /// Everything [`Self::from_geometry`] reports, and
    /// [`BridgeError::Kernel`] when the matrix flattens any face (a zero
    /// scale axis).
    pub fn from_mesh<M>(&self, mesh: &mut MeshInstance<M>) -> Result<K::Solid, BridgeError> {
        mesh.update_matrix();
        let solid = self.from_geometry(&mesh.geometry)?;
        self.kernel
            .transform(&solid, mesh.matrix())
            .map_err(BridgeError::kernel)
    }

    /// Extrudes `text` as stroke geometry.
    ///
    /// Every stroke becomes a rounded tube `style.weight` wide and
    /// `style.height` tall; the tubes are merged and scaled by
    /// `style.size / 20`. Text without strokes gives an empty solid.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::InvalidProfile`] for a non-positive weight, height
    ///   or size
    /// - [`BridgeError::Kernel`] when a stroke cannot be extruded
    pub fn from_text(&self, text: &str, style: &TextStyle) -> Result<K::Solid, BridgeError> {
        if !(style.size.is_finite() && style.size > 0.0) {
            return Err(BridgeError::invalid_profile(format!(
                "text size must be positive, got {}",
                style.size
            )));
        }
        let profile = ExtrusionProfile {
            width: style.weight,
            height: style.height,
            ..Default::default()
        };
        profile.validate()?;

        let strokes = vectorize_text(0.0, 0.0, text)
            .iter()
            .map(|line| extrude(&self.kernel, line, &profile))
            .collect::<Result<Vec<_>, _>>()?;
        let stroke_count = strokes.len();

        let merged = self.kernel.union_all(strokes);
        let solid = self.kernel.scale(&merged, style.size / FONT_DESIGN_SIZE);

        debug!(
            chars = text.chars().count(),
            strokes = stroke_count,
            polygons = self.kernel.polygons(&solid).len(),
            "text to solid"
        );
        Ok(solid)
    }

    /// Fan-triangulates every polygon into a new geometry.
    ///
    /// Vertices are not shared between polygons. Triangles carry their
    /// polygon's plane normal. A closing corner that repeats the first one
    /// is not stored again.
    pub fn to_geometry(&self, solid: &K::Solid) -> Geometry {
        let polygons = self.kernel.polygons(solid);
        let mut geometry = Geometry::with_capacity(polygons.len() * 4, polygons.len() * 2);

        for polygon in polygons {
            let positions = self.kernel.polygon_positions(polygon);
            let normal = self.kernel.polygon_normal(polygon);

            // A ring that repeats its first corner reuses the first index
            let ring = match positions.as_slice() {
                [first, rest @ .., last] if first == last => &positions[..rest.len() + 1],
                _ => positions.as_slice(),
            };
            let indices: Vec<u32> = ring
                .iter()
                .map(|&position| geometry.add_vertex(position))
                .collect();

            for i in 2..indices.len() {
                geometry.add_face(Face::triangle(
                    [indices[0], indices[i - 1], indices[i]],
                    normal,
                ));
            }
        }

        debug!(
            polygons = polygons.len(),
            vertices = geometry.vertex_count(),
            faces = geometry.face_count(),
            "solid to geometry"
        );
        geometry
    }

    /// [`Self::to_geometry`] paired with a material, identity transform.
    pub fn to_mesh<M>(&self, solid: &K::Solid, material: M) -> MeshInstance<M> {
        MeshInstance::new(self.to_geometry(solid), material)
    }
}

impl Default for Bridge<CsgKernel> {
    fn default() -> Self {
        Self::new(CsgKernel::default())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Assembles a [`Bridge`] from its collaborators.
#[derive(Debug, Clone)]
pub struct BridgeBuilder<K> {
    kernel: Option<K>,
}

impl<K> Default for BridgeBuilder<K> {
    fn default() -> Self {
        Self { kernel: None }
    }
}

impl<K: SolidKernel> BridgeBuilder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solid kernel.
    pub fn kernel(mut self, kernel: K) -> Self {
        self.kernel = Some(kernel);
        self
    }

    /// # Errors
    ///
    /// Returns [`BridgeError::MissingDependency`] when no kernel was given.
    pub fn build(self) -> Result<Bridge<K>, BridgeError> {
        let kernel = self.kernel.ok_or(BridgeError::MissingDependency {
            dependency: "solid kernel",
        })?;
        Ok(Bridge::new(kernel))
    }
}

#[cfg(test)]
mod tests;
