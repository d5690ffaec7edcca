//! # Solid CSG
//!
//! Polygon-soup solids with constructive solid geometry.
//!
//! ## Architecture
//!
//! ```text
//! Path2D ──rectangular_extrude──┐
//!                               ├──> Solid ──union/subtract/intersect──> Solid
//! Polygon (convex, planar) ─────┘      │
//!                                      └──to_compact_binary──> CompactBinary
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Path Outlines**: `geo` boolean union of segment and corner pieces
//! - **Caps**: Earcut triangulation
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use solid_csg::{Path2D, Solid};
//!
//! let a = Path2D::new(vec![DVec2::ZERO, DVec2::new(4.0, 0.0)], false)
//!     .rectangular_extrude(1.0, 1.0, 8, true)
//!     .unwrap();
//! let b = a.translate(glam::DVec3::new(0.0, 0.5, 0.0));
//! let both = Solid::union_all(vec![a, b]);
//! assert!(!both.is_empty());
//! ```

pub mod bsp;
pub mod compact;
pub mod error;
pub mod path2d;
pub mod plane;
pub mod polygon;
pub mod solid;
pub mod vertex;

pub use bsp::BspNode;
pub use compact::CompactBinary;
pub use error::CsgError;
pub use path2d::Path2D;
pub use plane::{Classification, Plane};
pub use polygon::Polygon;
pub use solid::Solid;
pub use vertex::Vertex;
