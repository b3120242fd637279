//! # Config Crate
//!
//! Centralized configuration constants for the foil mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FOIL_COUNT, DEFAULT_HUB_SEGMENTS, EPSILON_TOLERANCE};
//!
//! // Faces whose cross product is shorter than this have no orientation
//! let cross_length: f64 = 1e-13;
//! assert!(cross_length <= EPSILON_TOLERANCE);
//!
//! // Loft and hub defaults
//! assert_eq!(DEFAULT_FOIL_COUNT, 10);
//! assert_eq!(DEFAULT_HUB_SEGMENTS, 36);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure configuration values

pub mod constants;

#[cfg(test)]
mod tests;
