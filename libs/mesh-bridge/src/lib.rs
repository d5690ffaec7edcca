//! # Mesh Bridge
//!
//! Converts between triangle meshes, as a renderer holds them, and
//! polygon-soup solids for boolean modelling. Also turns text into
//! extruded stroke solids.
//!
//! ## Architecture
//!
//! ```text
//! font (Hershey simplex) → text (polylines) → extrude (per-stroke solids)
//!                                                   │
//! mesh (Geometry / BufferGeometry / MeshInstance) ──┼──> Bridge<K: SolidKernel>
//!                                                   │          │
//! codec (OneOrMany<Record>) ────────────────────────┘          └──> Geometry
//! ```
//!
//! The boolean kernel is injected: [`Bridge`] is generic over
//! [`SolidKernel`], and [`CsgKernel`] plugs in `solid-csg`.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_bridge::{Bridge, CsgKernel, Face, Geometry};
//!
//! let mut tri = Geometry::new();
//! let a = tri.add_vertex(DVec3::ZERO);
//! let b = tri.add_vertex(DVec3::X);
//! let c = tri.add_vertex(DVec3::Y);
//! tri.add_face(Face::triangle([a, b, c], DVec3::Z));
//!
//! let bridge = Bridge::new(CsgKernel::default());
//! let solid = bridge.from_geometry(&tri).unwrap();
//! assert_eq!(bridge.to_geometry(&solid).face_count(), 1);
//! ```

pub mod bridge;
pub mod codec;
pub mod error;
pub mod extrude;
pub mod font;
pub mod kernel;
pub mod mesh;
pub mod text;

pub use bridge::{Bridge, BridgeBuilder, TextStyle};
pub use codec::OneOrMany;
pub use error::BridgeError;
pub use extrude::{extrude, ExtrusionProfile};
pub use font::{Glyph, RawGlyph};
pub use kernel::{CsgKernel, SolidKernel};
pub use mesh::{BufferGeometry, Face, FaceIndices, FaceSource, Geometry, MeshGeometry, MeshInstance};
pub use text::{text_advance, vectorize_char, vectorize_text, Polyline};
