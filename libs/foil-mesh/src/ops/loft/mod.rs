//! # Profile Lofting
//!
//! Replicates a 2D profile across a sequence of stations along Z and joins
//! consecutive stations with triangle bands.
//!
//! ## Layout
//!
//! The base profile is appended first, then one contiguous block per
//! station, each `stride = profile.len()` vertices long and in profile
//! order. A band between two blocks has `2 * (stride - 1)` triangles: the
//! cross-section is NOT wrapped, so an open airfoil stays open. Profiles
//! that must close repeat their first point at the end.

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, Vertex};
use crate::profile::Profile;
use config::constants::{DEFAULT_BASE_Z, DEFAULT_STATION_Z_STEP, LOG_SCALE_OFFSET, MAX_VERTICES};
use glam::DVec3;
use serde::{Deserialize, Serialize};


/// Placement of one profile copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationParams {
    /// Uniform XY scale applied to the base profile
    pub scale: f64,
    /// Z coordinate of the whole station
    pub z: f64,
    /// Color written to every vertex of the station
    pub color: Option<[f32; 3]>,
}

impl StationParams {
    /// Creates an uncolored station.
    pub fn new(scale: f64, z: f64) -> Self {
        Self {
            scale,
            z,
            color: None,
        }
    }

    /// Sets the station color.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = Some(color);
        self
    }
}

/// Parameters for lofting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoftParams {
    /// Z coordinate of the base (unscaled) profile
    pub base_z: f64,
    /// Color of the base profile vertices
    pub base_color: Option<[f32; 3]>,
    /// Stations after the base, in loft order
    pub stations: Vec<StationParams>,
}

impl Default for LoftParams {
    fn default() -> Self {
        Self {
            base_z: DEFAULT_BASE_Z,
            base_color: None,
            stations: Vec::new(),
        }
    }
}

impl LoftParams {
    /// Creates parameters from an explicit station list.
    pub fn new(stations: Vec<StationParams>) -> Self {
        Self {
            stations,
            ..Default::default()
        }
    }

    /// Logarithmic progression used for shaded propeller blades.
    ///
    /// Station `n` in `1..=foil_count` is scaled by `ln(n + 2.5)` and placed
    /// at `z = base_z * 2.5 * n`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foil_mesh::LoftParams;
    ///
    /// let params = LoftParams::logarithmic(10);
    /// assert_eq!(params.stations.len(), 10);
    /// assert_eq!(params.stations[1].z, 5.0);
    /// ```
    pub fn logarithmic(foil_count: u32) -> Self {
        let base_z = DEFAULT_BASE_Z;
        let stations = (1..=foil_count)
            .map(|n| {
                let n = f64::from(n);
                StationParams::new((n + LOG_SCALE_OFFSET).ln(), base_z * DEFAULT_STATION_Z_STEP * n)
            })
            .collect();
        Self {
            base_z,
            base_color: None,
            stations,
        }
    }

    /// Linear progression used for the colored wireframe blade.
    ///
    /// Station `n` uses `f = 1 + n / foil_count` as both scale and Z factor,
    /// fading from warm to dark as it moves outward.
    pub fn linear(foil_count: u32) -> Self {
        let base_z = DEFAULT_BASE_Z;
        let total = f64::from(foil_count);
        let stations = (1..=foil_count)
            .map(|n| {
                let t = f64::from(n) / total;
                let factor = 1.0 + t;
                let color = [
                    (1.0 - t) as f32,
                    (0.9 - t / 2.0) as f32,
                    (0.5 - t / 2.0) as f32,
                ];
                StationParams::new(factor, base_z * factor).with_color(color)
            })
            .collect();
        Self {
            base_z,
            base_color: None,
            stations,
        }
    }

    /// Returns the total number of profile copies, base included.
    pub fn station_count(&self) -> usize {
        self.stations.len() + 1
    }
}

/// Lofts a profile across the given stations.
///
/// # Arguments
///
/// * `profile` - The cross-section, at least 2 points
/// * `params` - Base placement and stations
///
/// # Returns
///
/// A mesh with `(stations + 1) * k` vertices and
/// `stations * 2 * (k - 1)` triangles for a `k`-point profile. Normals are
/// left at zero.
///
/// # Example
///
/// ```rust
/// use foil_mesh::{loft, LoftParams, Profile, StationParams};
///
/// let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n").unwrap();
/// let params = LoftParams {
///     base_z: 0.0,
///     base_color: None,
///     stations: vec![StationParams::new(1.0, 1.0)],
/// };
/// let mesh = loft(&profile, &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn loft(profile: &Profile, params: &LoftParams) -> Result<Mesh> {
    let stride = profile.len();
    if stride < 2 {
        return Err(MeshError::degenerate(format!(
            "Profile must have at least 2 points to loft, got {stride}"
        )));
    }

    let vertex_count = stride
        .checked_mul(params.station_count())
        .filter(|&count| count <= MAX_VERTICES)
        .ok_or(MeshError::TooManyVertices {
            count: stride.saturating_mul(params.station_count()),
            max: MAX_VERTICES,
        })?;
    let mut mesh = Mesh::with_capacity(vertex_count, params.stations.len() * 2 * (stride - 1));

    for p in profile.points() {
        mesh.add_vertex(Vertex::with_color(
            DVec3::new(p.x, p.y, params.base_z),
            params.base_color,
        ));
    }

    for station in &params.stations {
        for p in profile.points() {
            let scaled = *p * station.scale;
            mesh.add_vertex(Vertex::with_color(
                DVec3::new(scaled.x, scaled.y, station.z),
                station.color,
            ));
        }
        add_band(&mut mesh, stride);
    }

    tracing::debug!(
        stations = params.station_count(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Lofted profile"
    );
    Ok(mesh)
}

/// Joins the last appended station block to the block before it.
///
/// Walks down from the last vertex so every index points at an already
/// appended vertex.
fn add_band(mesh: &mut Mesh, stride: usize) {
    let last = mesh.vertex_count() - 1;
    let stride = stride as u32;

    for ii in ((last + 2 - stride as usize)..=last).rev() {
        let ii = ii as u32;
        mesh.add_triangle(ii, ii - 1, ii - 1 - stride);
        mesh.add_triangle(ii, ii - 1 - stride, ii - stride);
    }
}
