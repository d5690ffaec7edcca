//! # Solid Errors
//!
//! Error types for polygon construction, extrusion and record decoding.

use thiserror::Error;

/// Errors that can occur while building or decoding solids.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsgError {
    /// Polygon has too few vertices or no well-defined plane
    #[error("Degenerate polygon: {message}")]
    DegeneratePolygon { message: String },

    /// Polygon turns the wrong way at one of its corners
    #[error("Polygon is not convex at corner {corner}")]
    NonConvexPolygon { corner: usize },

    /// Path cannot be swept
    #[error("Degenerate path: {message}")]
    DegeneratePath { message: String },

    /// Transform flattens polygons onto a line or point
    #[error("Transform collapses {collapsed} of {total} polygons")]
    CollapsedTransform { collapsed: usize, total: usize },

    /// Extrusion parameters are out of range
    #[error("Invalid extrusion: {message}")]
    InvalidExtrusion { message: String },

    /// Compact record is internally inconsistent
    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    /// Compact record carries a foreign class tag
    #[error("Unsupported record class '{class}'")]
    UnsupportedClass { class: String },
}

impl CsgError {
    /// Creates a degenerate polygon error.
    pub fn degenerate_polygon(message: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            message: message.into(),
        }
    }

    /// Creates a degenerate path error.
    pub fn degenerate_path(message: impl Into<String>) -> Self {
        Self::DegeneratePath {
            message: message.into(),
        }
    }

    /// Creates an invalid extrusion error.
    pub fn invalid_extrusion(message: impl Into<String>) -> Self {
        Self::InvalidExtrusion {
            message: message.into(),
        }
    }

    /// Creates a malformed record error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }
}
