//! # Configuration Constants
//!
//! Centralized constants for the mesh/solid bridge. All tolerances, font
//! metrics, extrusion defaults and record tags are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Font**: Metrics of the built-in stroke font
//! - **Extrusion**: Default cross-section profile for path sweeps
//! - **Text**: Default style for extruded text
//! - **Records**: Compact binary record tags
//! - **Limits**: Stack budget for recursive tree walks

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Thickness of a plane used when classifying points against it.
///
/// Points closer than this to a BSP splitting plane are treated as lying on
/// it. Matches the tolerance of the csg.js algorithm.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, PLANE_EPSILON};
/// assert!(PLANE_EPSILON > EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Tolerance applied to the convexity test of a polygon.
///
/// A corner whose turn (projected on the polygon normal) is negative by more
/// than this value makes the polygon non-convex.
pub const CONVEXITY_EPSILON: f64 = 1e-9;

// =============================================================================
// FONT CONSTANTS
// =============================================================================

/// First character code covered by the stroke font (space).
///
/// # Example
///
/// ```rust
/// use config::constants::FONT_FIRST_CODE;
/// assert_eq!(char::from_u32(FONT_FIRST_CODE), Some(' '));
/// ```
pub const FONT_FIRST_CODE: u32 = 32;

/// Number of glyphs in the stroke font (codes 32 through 126).
pub const FONT_GLYPH_COUNT: usize = 95;

/// Vertical distance the pen moves down for every newline.
pub const FONT_LINE_HEIGHT: f64 = 30.0;

/// Size, in font units, the stroke font is designed at.
///
/// Text is scaled by `size / FONT_DESIGN_SIZE` after extrusion.
///
/// # Example
///
/// ```rust
/// use config::constants::FONT_DESIGN_SIZE;
/// let scale = 40.0 / FONT_DESIGN_SIZE;
/// assert_eq!(scale, 2.0);
/// ```
pub const FONT_DESIGN_SIZE: f64 = 20.0;

/// Coordinate pair that ends one stroke and starts the next inside a glyph.
pub const FONT_STROKE_BREAK: (i8, i8) = (-1, -1);

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Default width of the rectangular cross-section swept along a path.
pub const DEFAULT_EXTRUDE_WIDTH: f64 = 1.0;

/// Default height of the rectangular cross-section swept along a path.
pub const DEFAULT_EXTRUDE_HEIGHT: f64 = 1.0;

/// Default number of facets used to approximate a rounded corner.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CORNER_SEGMENTS;
///
/// let user_fn: Option<u32> = None;
/// assert_eq!(user_fn.unwrap_or(DEFAULT_CORNER_SEGMENTS), 8);
/// ```
pub const DEFAULT_CORNER_SEGMENTS: u32 = 8;

/// Fewest facets a rounded corner is ever built with.
pub const MIN_CORNER_SEGMENTS: u32 = 4;

/// Most facets a rounded corner is ever built with.
pub const MAX_CORNER_SEGMENTS: u32 = 256;

/// Longest mitre allowed, as a multiple of the half-width, before a sharp
/// corner falls back to a bevel.
pub const MITER_LIMIT: f64 = 4.0;

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Default stroke weight (cross-section width) of extruded text.
pub const DEFAULT_TEXT_WEIGHT: f64 = 3.0;

/// Default extrusion thickness of text.
pub const DEFAULT_TEXT_HEIGHT: f64 = 5.0;

/// Default font size of text.
pub const DEFAULT_TEXT_SIZE: f64 = 20.0;

// =============================================================================
// RECORD CONSTANTS
// =============================================================================

/// Class tag carried by every compact binary record of a solid.
///
/// # Example
///
/// ```rust
/// use config::constants::SOLID_CLASS_TAG;
/// assert_eq!(SOLID_CLASS_TAG, "CSG");
/// ```
pub const SOLID_CLASS_TAG: &str = "CSG";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which a recursive tree walk grows a new segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// KERNEL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings a solid kernel runs with.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let config = KernelConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Slack allowed by the convexity check of polygons built from mesh faces.
    pub tolerance: f64,
}

impl KernelConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: CONVEXITY_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested corner facet count into the supported range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_corner_segments, MIN_CORNER_SEGMENTS};
///
/// assert_eq!(clamp_corner_segments(1), MIN_CORNER_SEGMENTS);
/// assert_eq!(clamp_corner_segments(12), 12);
/// ```
pub fn clamp_corner_segments(requested: u32) -> u32 {
    requested.clamp(MIN_CORNER_SEGMENTS, MAX_CORNER_SEGMENTS)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
