//! # Configuration Constants
//!
//! Centralized constants for the foil mesh pipeline. Loft progressions, hub
//! tessellation, precision values and output limits are defined here so the
//! geometry crates never carry literals of their own.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Loft**: Station placement and scale progression defaults
//! - **Hub**: Cylindrical hub dimensions and angular resolution
//! - **Output**: Colors and index limits for GPU buffers

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length below which a face cross product is treated as degenerate.
///
/// Faces this small have no usable orientation and are skipped during
/// normal synthesis.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-12;

/// Minimum triangle area accepted by mesh validation.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON_TOLERANCE, VERTEX_MERGE_EPSILON};
/// assert!(VERTEX_MERGE_EPSILON >= EPSILON_TOLERANCE);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1.0e-8;

/// Tolerance used when comparing synthesized normals against unit length.
///
/// # Examples
/// ```
/// use config::constants::UNIT_LENGTH_TOLERANCE;
/// let length: f64 = 1.0 + 1.0e-7;
/// assert!((length - 1.0).abs() < UNIT_LENGTH_TOLERANCE);
/// ```
pub const UNIT_LENGTH_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// LOFT CONSTANTS
// =============================================================================

/// Z coordinate of the base station (the raw profile).
///
/// Profile files carry only X and Y; every loaded point sits on this plane
/// until the lofter places copies of it.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BASE_Z;
/// assert_eq!(DEFAULT_BASE_Z, 1.0);
/// ```
pub const DEFAULT_BASE_Z: f64 = 1.0;

/// Number of stations lofted after the base station.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FOIL_COUNT;
/// assert!(DEFAULT_FOIL_COUNT >= 1);
/// ```
pub const DEFAULT_FOIL_COUNT: u32 = 10;

/// Offset inside the logarithm of the logarithmic scale progression.
///
/// Station `n` is scaled by `ln(n + LOG_SCALE_OFFSET)`, so the first
/// station is already larger than the base profile.
///
/// # Examples
/// ```
/// use config::constants::LOG_SCALE_OFFSET;
/// assert!((1.0 + LOG_SCALE_OFFSET).ln() > 1.0);
/// ```
pub const LOG_SCALE_OFFSET: f64 = 2.5;

/// Z spacing multiplier of the logarithmic progression.
///
/// Station `n` sits at `base_z * DEFAULT_STATION_Z_STEP * n`.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_BASE_Z, DEFAULT_STATION_Z_STEP};
/// assert_eq!(DEFAULT_BASE_Z * DEFAULT_STATION_Z_STEP * 2.0, 5.0);
/// ```
pub const DEFAULT_STATION_Z_STEP: f64 = 2.5;

// =============================================================================
// HUB CONSTANTS
// =============================================================================

/// Radius of the cylindrical hub, also the radial offset of every blade root.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HUB_RADIUS;
/// assert!(DEFAULT_HUB_RADIUS > 0.0);
/// ```
pub const DEFAULT_HUB_RADIUS: f64 = 3.0;

/// Length of the hub along Z, measured from `z = 0`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HUB_HEIGHT;
/// assert_eq!(DEFAULT_HUB_HEIGHT, 30.0);
/// ```
pub const DEFAULT_HUB_HEIGHT: f64 = 30.0;

/// Angular step between hub samples, in degrees.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HUB_ANGLE_STEP_DEGREES;
/// assert_eq!(360 % DEFAULT_HUB_ANGLE_STEP_DEGREES, 0);
/// ```
pub const DEFAULT_HUB_ANGLE_STEP_DEGREES: u32 = 10;

/// Hub samples around the full circle.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HUB_SEGMENTS;
/// assert_eq!(DEFAULT_HUB_SEGMENTS, 36);
/// ```
pub const DEFAULT_HUB_SEGMENTS: u32 = 360 / DEFAULT_HUB_ANGLE_STEP_DEGREES;

/// Number of blades placed around the hub.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BLADE_COUNT;
/// assert_eq!(DEFAULT_BLADE_COUNT, 3);
/// ```
pub const DEFAULT_BLADE_COUNT: u32 = 3;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Color written for vertices that carry none (RGB, f32 for GPU).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COLOR;
/// assert!(DEFAULT_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
/// ```
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 0.5, 0.31];

/// Largest vertex count addressable by a `u32` index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert_eq!(MAX_VERTICES, u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Immutable snapshot of pipeline settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.hub_segments, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance below which two profile points coincide.
    pub tolerance: f64,
    /// Stations lofted after the base profile.
    pub foil_count: u32,
    /// Angular samples around the hub.
    pub hub_segments: u32,
    /// Blades placed around the hub.
    pub blade_count: u32,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting values no mesh can be built from.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 4, 24, 2).expect("valid config");
    /// assert_eq!(cfg.hub_segments, 24);
    /// assert!(GlobalConfig::new(1.0e-9, 0, 24, 2).is_err());
    /// ```
    pub fn new(
        tolerance: f64,
        foil_count: u32,
        hub_segments: u32,
        blade_count: u32,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if foil_count == 0 {
            return Err(ConfigError::InvalidFoilCount(foil_count));
        }
        if hub_segments < 3 {
            return Err(ConfigError::InvalidSegments(hub_segments));
        }
        if blade_count == 0 {
            return Err(ConfigError::InvalidBladeCount(blade_count));
        }
        Ok(Self {
            tolerance,
            foil_count,
            hub_segments,
            blade_count,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            foil_count: DEFAULT_FOIL_COUNT,
            hub_segments: DEFAULT_HUB_SEGMENTS,
            blade_count: DEFAULT_BLADE_COUNT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when no station would be lofted.
    InvalidFoilCount(u32),
    /// Raised when the hub segment count is too small to form a ring.
    InvalidSegments(u32),
    /// Raised when no blade would be placed.
    InvalidBladeCount(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidFoilCount(value) => {
                write!(f, "foil_count must be >= 1: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "hub_segments must be >= 3: {value}")
            }
            ConfigError::InvalidBladeCount(value) => {
                write!(f, "blade_count must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
