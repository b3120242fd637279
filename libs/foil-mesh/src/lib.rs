//! # Foil Mesh
//!
//! Procedural mesh generation for airfoil blades and propellers.
//! Loads a 2D profile, lofts it into a triangle surface and synthesizes
//! smooth shading normals for rendering.
//!
//! ## Architecture
//!
//! ```text
//! profile file → Profile → loft (Mesh) → compute_normals → MeshBuffers
//!                              hub ┘
//! ```
//!
//! All geometry is computed in `f64`; conversion to `f32` only happens in
//! [`export`].
//!
//! ## Usage
//!
//! ```rust
//! use foil_mesh::{loft, LoftParams, Profile, StationParams};
//!
//! let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n")?;
//! let params = LoftParams::new(vec![StationParams::new(1.0, 2.0)]);
//! let mut mesh = loft(&profile, &params)?;
//! mesh.compute_normals();
//! assert_eq!(mesh.triangle_count(), 4);
//! # Ok::<(), foil_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;
pub mod propeller;

pub use error::{MeshError, Result};
pub use export::{MeshBuffers, VertexLayout};
pub use mesh::{Mesh, Vertex};
pub use ops::loft::{loft, LoftParams, StationParams};
pub use ops::normals::compute_normals;
pub use primitives::hub::{create_hub, HubParams};
pub use profile::{Profile, ProfilePoint};
pub use propeller::{Propeller, PropellerParams};
