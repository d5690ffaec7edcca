//! # Path Extruder
//!
//! Sweeps a rectangular cross-section along a 2D polyline. Validation
//! happens here; the geometry itself is built by the kernel.

use crate::error::BridgeError;
use crate::kernel::SolidKernel;
use config::constants::{DEFAULT_CORNER_SEGMENTS, DEFAULT_EXTRUDE_HEIGHT, DEFAULT_EXTRUDE_WIDTH};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Cross-section and corner treatment of an extrusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionProfile {
    /// Width of the tube, centred on the path
    pub width: f64,
    /// Height of the tube, from `z = 0` upward
    pub height: f64,
    /// Facets per full turn of a rounded corner (at least 4 are used)
    pub corner_segments: u32,
    /// Connect the last point back to the first
    pub closed: bool,
    /// Rounded corners and ends; mitred corners and flat ends otherwise
    pub round: bool,
}

impl Default for ExtrusionProfile {
    fn default() -> Self {
        Self {
            width: DEFAULT_EXTRUDE_WIDTH,
            height: DEFAULT_EXTRUDE_HEIGHT,
            corner_segments: DEFAULT_CORNER_SEGMENTS,
            closed: false,
            round: true,
        }
    }
}

impl ExtrusionProfile {
    /// Checks that width and height are positive and finite.
    pub fn validate(&self) -> Result<(), BridgeError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BridgeError::invalid_profile(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Sweeps `profile` along `path`.
///
/// # Errors
///
/// - [`BridgeError::DegenerateExtrusionInput`] for fewer than two points
/// - [`BridgeError::InvalidProfile`] for a non-positive width or height
/// - [`BridgeError::Kernel`] when the kernel cannot build the solid, for
///   instance from non-finite points
pub fn extrude<K: SolidKernel>(
    kernel: &K,
    path: &[DVec2],
    profile: &ExtrusionProfile,
) -> Result<K::Solid, BridgeError> {
    if path.len() < 2 {
        return Err(BridgeError::DegenerateExtrusionInput { points: path.len() });
    }
    profile.validate()?;
    trace!(points = path.len(), ?profile, "extruding path");
    kernel.extrude_path(path, profile).map_err(BridgeError::kernel)
}
