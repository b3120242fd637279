//! # Hub Primitive
//!
//! Open-ended cylindrical hub the blades are mounted on. Unlike the profile
//! loft, the ring is closed: the last angular sample is joined back to the
//! first.

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, Vertex};
use config::constants::{DEFAULT_HUB_HEIGHT, DEFAULT_HUB_RADIUS, DEFAULT_HUB_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;


/// Parameters for hub generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubParams {
    /// Cylinder radius
    pub radius: f64,
    /// Z of the bottom ring
    pub z_bottom: f64,
    /// Z of the top ring
    pub z_top: f64,
    /// Angular samples around the circle
    pub segments: u32,
}

impl Default for HubParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_HUB_RADIUS,
            z_bottom: 0.0,
            z_top: DEFAULT_HUB_HEIGHT,
            segments: DEFAULT_HUB_SEGMENTS,
        }
    }
}

impl HubParams {
    /// Derives the segment count from an angular step in degrees.
    ///
    /// Steps that do not divide 360 round the count up, so the ring never
    /// has a gap wider than `step_degrees`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foil_mesh::primitives::HubParams;
    ///
    /// let hub = HubParams::from_angle_step(3.0, 0.0, 30.0, 10.0);
    /// assert_eq!(hub.segments, 36);
    /// ```
    pub fn from_angle_step(radius: f64, z_bottom: f64, z_top: f64, step_degrees: f64) -> Self {
        let segments = if step_degrees > 0.0 {
            (360.0 / step_degrees).ceil().min(f64::from(u32::MAX)) as u32
        } else {
            0
        };
        Self {
            radius,
            z_bottom,
            z_top,
            segments,
        }
    }
}

/// Creates the hub mesh.
///
/// Sample `k` contributes bottom vertex `2k` and top vertex `2k + 1`. Each
/// sample is joined to the next (`(k + 1) % segments`) with two triangles.
///
/// # Example
///
/// ```rust
/// use foil_mesh::primitives::{create_hub, HubParams};
///
/// let mesh = create_hub(&HubParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 72);
/// assert_eq!(mesh.triangle_count(), 72);
/// ```
pub fn create_hub(params: &HubParams) -> Result<Mesh> {
    if params.radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Hub radius must be positive: {}",
            params.radius
        )));
    }
    if params.z_top <= params.z_bottom {
        return Err(MeshError::degenerate(format!(
            "Hub top must lie above bottom: z_bottom={}, z_top={}",
            params.z_bottom, params.z_top
        )));
    }
    if params.segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Hub segments must be at least 3: {}",
            params.segments
        )));
    }
    if params.segments > u32::MAX / 2 {
        return Err(MeshError::TooManyVertices {
            count: params.segments as usize * 2,
            max: u32::MAX as usize,
        });
    }

    let segments = params.segments;
    let mut mesh = Mesh::with_capacity(segments as usize * 2, segments as usize * 2);

    for k in 0..segments {
        let theta = TAU * f64::from(k) / f64::from(segments);
        let (sin, cos) = theta.sin_cos();
        let x = params.radius * cos;
        let y = params.radius * sin;
        mesh.add_vertex(Vertex::new(DVec3::new(x, y, params.z_bottom)));
        mesh.add_vertex(Vertex::new(DVec3::new(x, y, params.z_top)));
    }

    for k in 0..segments {
        let next = (k + 1) % segments;
        let (bottom, top) = (2 * k, 2 * k + 1);
        let (next_bottom, next_top) = (2 * next, 2 * next + 1);

        mesh.add_triangle(next_bottom, top, bottom);
        mesh.add_triangle(next_top, top, next_bottom);
    }

    tracing::debug!(
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Built hub"
    );
    Ok(mesh)
}
