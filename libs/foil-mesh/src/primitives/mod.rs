//! # Primitives
//!
//! Mesh generation for fixed shapes that do not come from a profile.

pub mod hub;

pub use hub::{create_hub, HubParams};
