//! # Mesh Operations
//!
//! Profile lofting and shading normal synthesis.

pub mod loft;
pub mod normals;

pub use loft::{loft, LoftParams, StationParams};
pub use normals::{compute_normals, face_normal};
