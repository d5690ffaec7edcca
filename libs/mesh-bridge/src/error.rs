//! # Bridge Errors
//!
//! Error types for mesh/solid conversion, text extrusion and record
//! pass-through.

use thiserror::Error;

/// Boxed failure reported by a solid kernel.
pub type KernelFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while bridging meshes and solids.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A required collaborator was not supplied
    #[error("Missing dependency: {dependency}")]
    MissingDependency { dependency: &'static str },

    /// Indexed layout describes a face that is neither a triangle nor a quad
    #[error("Face {face} has unsupported arity {arity}")]
    InvalidFaceType { face: usize, arity: usize },

    /// Face references a vertex that does not exist
    #[error("Face {face} references vertex {index}, but only {vertex_count} exist")]
    InvalidVertexIndex {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Face cannot become a convex polygon
    #[error("Face {face} is not a valid polygon: {reason}")]
    InvalidPolygon { face: usize, reason: String },

    /// Record does not encode a solid
    #[error("Record {index} has unsupported class '{class}'")]
    UnsupportedResultType { index: usize, class: String },

    /// Path has too few points to extrude
    #[error("Cannot extrude a path of {points} point(s)")]
    DegenerateExtrusionInput { points: usize },

    /// Extrusion profile is out of range
    #[error("Invalid extrusion profile: {message}")]
    InvalidProfile { message: String },

    /// Any other failure inside the kernel
    #[error("Kernel error: {0}")]
    Kernel(#[source] KernelFailure),
}

impl BridgeError {
    /// Creates an invalid polygon error.
    pub fn invalid_polygon(face: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            face,
            reason: reason.into(),
        }
    }

    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }

    /// Wraps a kernel error.
    pub fn kernel<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Kernel(Box::new(source))
    }
}
