//! # Propeller Assembly
//!
//! Combines one lofted blade and the hub into a complete propeller. The
//! blade mesh is built once; each blade instance is a placement transform
//! applied when the parts are assembled.

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;
use crate::ops::loft::{loft, LoftParams};
use crate::primitives::hub::{create_hub, HubParams};
use crate::profile::Profile;
use config::constants::{GlobalConfig, MAX_VERTICES};
use glam::{DMat4, DVec3};
use std::f64::consts::TAU;

/// Parameters for propeller assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellerParams {
    /// Number of blades spread evenly around the hub
    pub blade_count: u32,
    /// Hub dimensions
    pub hub: HubParams,
    /// Blade stations
    pub loft: LoftParams,
}

impl Default for PropellerParams {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

impl PropellerParams {
    /// Builds parameters from a validated configuration.
    ///
    /// Uses the logarithmic station preset and the default hub extent.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            blade_count: config.blade_count,
            hub: HubParams {
                segments: config.hub_segments,
                ..HubParams::default()
            },
            loft: LoftParams::logarithmic(config.foil_count),
        }
    }
}

/// A built propeller: one blade, the hub and the blade placements.
#[derive(Debug, Clone)]
pub struct Propeller {
    blade: Mesh,
    hub: Mesh,
    blade_transforms: Vec<DMat4>,
}

impl Propeller {
    /// Lofts the blade, builds the hub and computes normals for both.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` for a zero blade count, and propagates
    /// loft and hub failures.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foil_mesh::{Profile, Propeller, PropellerParams};
    ///
    /// let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n").unwrap();
    /// let propeller = Propeller::build(&profile, &PropellerParams::default()).unwrap();
    /// assert_eq!(propeller.blade_transforms().len(), 3);
    /// ```
    pub fn build(profile: &Profile, params: &PropellerParams) -> Result<Self> {
        if params.blade_count == 0 {
            return Err(MeshError::degenerate("Propeller needs at least one blade"));
        }

        let mut blade = loft(profile, &params.loft)?;
        blade.compute_normals();

        let mut hub = create_hub(&params.hub)?;
        hub.compute_normals();

        let mount = DMat4::from_translation(DVec3::new(params.hub.radius, 0.0, 0.0));
        let blade_transforms = (0..params.blade_count)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(params.blade_count);
                DMat4::from_rotation_z(angle) * mount
            })
            .collect();

        tracing::info!(
            blades = params.blade_count,
            blade_vertices = blade.vertex_count(),
            hub_vertices = hub.vertex_count(),
            "Built propeller"
        );

        Ok(Self {
            blade,
            hub,
            blade_transforms,
        })
    }

    /// The untransformed blade mesh.
    pub fn blade(&self) -> &Mesh {
        &self.blade
    }

    /// The hub mesh.
    pub fn hub(&self) -> &Mesh {
        &self.hub
    }

    /// Placement of each blade instance.
    pub fn blade_transforms(&self) -> &[DMat4] {
        &self.blade_transforms
    }

    /// Merges the hub and every placed blade into one mesh.
    ///
    /// The hub comes first, followed by the blades in placement order.
    ///
    /// # Errors
    ///
    /// Returns `TooManyVertices` if the assembled mesh would not fit a
    /// `u32` index buffer.
    pub fn assemble(&self) -> Result<Mesh> {
        let copies = self.blade_transforms.len();
        let vertex_count =
            assembled_vertex_count(self.hub.vertex_count(), self.blade.vertex_count(), copies)?;
        let triangle_count = self
            .blade
            .triangle_count()
            .saturating_mul(copies)
            .saturating_add(self.hub.triangle_count());

        let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);
        mesh.merge(&self.hub)?;

        for transform in &self.blade_transforms {
            let mut blade = self.blade.clone();
            blade.transform(transform);
            mesh.merge(&blade)?;
        }

        Ok(mesh)
    }
}

/// Vertex count of a hub plus `copies` blades, bounded by `MAX_VERTICES`.
fn assembled_vertex_count(hub: usize, blade: usize, copies: usize) -> Result<usize> {
    blade
        .checked_mul(copies)
        .and_then(|blades| blades.checked_add(hub))
        .filter(|&total| total <= MAX_VERTICES)
        .ok_or(MeshError::TooManyVertices {
            count: blade.saturating_mul(copies).saturating_add(hub),
            max: MAX_VERTICES,
        })
}
