//! # Mesh Data Structures
//!
//! Surface meshes as handed over by a rendering harness: a face-list
//! [`Geometry`], an indexed [`BufferGeometry`], and a [`MeshInstance`] that
//! pairs either one with a material and a TRS transform.

use crate::error::BridgeError;
use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// =============================================================================
// FACES
// =============================================================================

/// Vertex indices of a face, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceIndices {
    Triangle([u32; 3]),
    Quad([u32; 4]),
}

impl FaceIndices {
    /// Indices as a slice.
    pub fn as_slice(&self) -> &[u32] {
        match self {
            FaceIndices::Triangle(indices) => indices,
            FaceIndices::Quad(indices) => indices,
        }
    }

    /// Number of corners.
    #[inline]
    pub fn arity(&self) -> usize {
        self.as_slice().len()
    }
}

/// A mesh face with its normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub indices: FaceIndices,
    pub normal: DVec3,
}

impl Face {
    pub fn triangle(indices: [u32; 3], normal: DVec3) -> Self {
        Self {
            indices: FaceIndices::Triangle(indices),
            normal,
        }
    }

    pub fn quad(indices: [u32; 4], normal: DVec3) -> Self {
        Self {
            indices: FaceIndices::Quad(indices),
            normal,
        }
    }
}

// =============================================================================
// FACE-LIST GEOMETRY
// =============================================================================

/// Face-list mesh: a vertex list and faces indexing into it.
///
/// Indices stay stable for the lifetime of the geometry; faces are not
/// validated on insertion.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_bridge::{Face, Geometry};
///
/// let mut geometry = Geometry::new();
/// let a = geometry.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = geometry.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = geometry.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// geometry.add_face(Face::triangle([a, b, c], DVec3::Z));
/// assert_eq!(geometry.surface_area(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a geometry with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Creates a geometry from existing parts.
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Total area of all faces, quads counted as two triangles.
    ///
    /// Faces with out-of-range indices contribute nothing.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .filter_map(|face| {
                face.indices
                    .as_slice()
                    .iter()
                    .map(|&i| self.vertices.get(i as usize).copied())
                    .collect::<Option<Vec<DVec3>>>()
            })
            .map(|corners| {
                (2..corners.len())
                    .map(|i| {
                        (corners[i - 1] - corners[0])
                            .cross(corners[i] - corners[0])
                            .length()
                            / 2.0
                    })
                    .sum::<f64>()
            })
            .sum()
    }

    /// Computes the axis-aligned bounding box of the vertices.
    ///
    /// Returns (min, max) corners, or `None` without vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}

// =============================================================================
// INDEXED BUFFER GEOMETRY
// =============================================================================

/// Flat position buffer with an optional index buffer.
///
/// Every `vertices_per_face` consecutive entries of the index (or of the
/// positions, when there is no index) form one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferGeometry {
    pub positions: Vec<DVec3>,
    pub index: Option<Vec<u32>>,
    pub vertices_per_face: usize,
}

impl BufferGeometry {
    /// Non-indexed triangle buffer.
    pub fn new(positions: Vec<DVec3>) -> Self {
        Self {
            positions,
            index: None,
            vertices_per_face: 3,
        }
    }

    /// Indexed triangle buffer.
    pub fn indexed(positions: Vec<DVec3>, index: Vec<u32>) -> Self {
        Self {
            positions,
            index: Some(index),
            vertices_per_face: 3,
        }
    }

    pub fn with_vertices_per_face(mut self, vertices_per_face: usize) -> Self {
        self.vertices_per_face = vertices_per_face;
        self
    }

    /// Builds the equivalent face-list geometry. The buffer is left untouched.
    ///
    /// Face normals come from the first three corners.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::InvalidFaceType`] when faces are neither triangles nor
    ///   quads, or the corner list ends with a partial face
    /// - [`BridgeError::InvalidVertexIndex`] when an index is out of range
    pub fn materialize(&self) -> Result<Geometry, BridgeError> {
        let corners: Cow<'_, [u32]> = match &self.index {
            Some(index) => Cow::Borrowed(index),
            None => Cow::Owned((0..self.positions.len() as u32).collect()),
        };
        let arity = self.vertices_per_face;
        if arity == 0 {
            return if corners.is_empty() {
                Ok(Geometry::from_parts(self.positions.clone(), Vec::new()))
            } else {
                Err(BridgeError::InvalidFaceType { face: 0, arity })
            };
        }

        let mut faces = Vec::with_capacity(corners.len() / arity);
        for (face, chunk) in corners.chunks(arity).enumerate() {
            for &index in chunk {
                if index as usize >= self.positions.len() {
                    return Err(BridgeError::InvalidVertexIndex {
                        face,
                        index,
                        vertex_count: self.positions.len(),
                    });
                }
            }
            let indices = match *chunk {
                [a, b, c] => FaceIndices::Triangle([a, b, c]),
                [a, b, c, d] => FaceIndices::Quad([a, b, c, d]),
                _ => {
                    return Err(BridgeError::InvalidFaceType {
                        face,
                        arity: chunk.len(),
                    })
                }
            };
            let p = |i: usize| self.positions[chunk[i] as usize];
            let normal = (p(1) - p(0)).cross(p(2) - p(0)).normalize_or_zero();
            faces.push(Face { indices, normal });
        }

        Ok(Geometry::from_parts(self.positions.clone(), faces))
    }
}

// =============================================================================
// GEOMETRY SOURCES
// =============================================================================

/// Either mesh layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeshGeometry {
    Faces(Geometry),
    Buffer(BufferGeometry),
}

impl From<Geometry> for MeshGeometry {
    fn from(geometry: Geometry) -> Self {
        MeshGeometry::Faces(geometry)
    }
}

impl From<BufferGeometry> for MeshGeometry {
    fn from(buffer: BufferGeometry) -> Self {
        MeshGeometry::Buffer(buffer)
    }
}

/// Anything that can be viewed as a face-list geometry.
pub trait FaceSource {
    /// Borrows a face list, materializing it first if needed.
    fn face_list(&self) -> Result<Cow<'_, Geometry>, BridgeError>;
}

impl FaceSource for Geometry {
    fn face_list(&self) -> Result<Cow<'_, Geometry>, BridgeError> {
        Ok(Cow::Borrowed(self))
    }
}

impl FaceSource for BufferGeometry {
    fn face_list(&self) -> Result<Cow<'_, Geometry>, BridgeError> {
        self.materialize().map(Cow::Owned)
    }
}

impl FaceSource for MeshGeometry {
    fn face_list(&self) -> Result<Cow<'_, Geometry>, BridgeError> {
        match self {
            MeshGeometry::Faces(geometry) => geometry.face_list(),
            MeshGeometry::Buffer(buffer) => buffer.face_list(),
        }
    }
}

// =============================================================================
// MESH INSTANCE
// =============================================================================

/// Geometry placed in the world with a material.
///
/// The world matrix is cached; changing the position, rotation or scale
/// marks it stale until [`MeshInstance::update_matrix`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshInstance<M> {
    pub geometry: MeshGeometry,
    pub material: M,
    position: DVec3,
    rotation: DQuat,
    scale: DVec3,
    matrix: DMat4,
    matrix_needs_update: bool,
}

impl<M> MeshInstance<M> {
    /// Creates an instance with the identity transform.
    pub fn new(geometry: impl Into<MeshGeometry>, material: M) -> Self {
        Self {
            geometry: geometry.into(),
            material,
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            matrix: DMat4::IDENTITY,
            matrix_needs_update: false,
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.matrix_needs_update = true;
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.rotation = rotation;
        self.matrix_needs_update = true;
    }

    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: DVec3) {
        self.scale = scale;
        self.matrix_needs_update = true;
    }

    /// Cached world matrix; stale while [`Self::matrix_needs_update`] is true.
    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    pub fn matrix_needs_update(&self) -> bool {
        self.matrix_needs_update
    }

    /// Recomposes the matrix from scale, rotation and position if stale.
    pub fn update_matrix(&mut self) {
        if self.matrix_needs_update {
            self.matrix =
                DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.position);
            self.matrix_needs_update = false;
        }
    }
}
