//! # Config Crate
//!
//! Centralized configuration constants for the mesh/solid bridge.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PLANE_EPSILON, DEFAULT_CORNER_SEGMENTS, FONT_LINE_HEIGHT};
//!
//! // Points closer than PLANE_EPSILON to a plane lie on it
//! let distance: f64 = 1e-7;
//! assert!(distance.abs() < PLANE_EPSILON);
//!
//! // Rounded corners fall back to the default facet count
//! let requested: Option<u32> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_CORNER_SEGMENTS), 8);
//!
//! // Each newline moves the pen down one line
//! assert_eq!(FONT_LINE_HEIGHT, 30.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Safe to depend on from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
