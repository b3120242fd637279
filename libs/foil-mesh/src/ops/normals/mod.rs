//! # Normal Synthesis
//!
//! Smooth shading normals for lofted surfaces.
//!
//! Each face normal is folded into its vertices as an online running
//! average, re-normalized after every step:
//!
//! ```text
//! n_k = normalize(n_{k-1} * (1 - 1/k) + f * (1/k))
//! ```
//!
//! The fold order (triangles in index order, corners `a, b, c`) is part of
//! the result and must not change.

use crate::mesh::Vertex;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

#[cfg(test)]
mod tests;

/// Computes the unit face normal `normalize((c - b) × (a - b))`.
///
/// Returns `None` for degenerate faces.
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> Option<DVec3> {
    let cross = (c - b).cross(a - b);
    let length = cross.length();
    (length > EPSILON_TOLERANCE).then(|| cross * length.recip())
}

/// Computes per-vertex shading normals in place.
///
/// Positions and colors are untouched. Every vertex referenced by a
/// non-degenerate triangle ends with a unit normal; every other vertex ends
/// with `(0, 0, 0)`. Degenerate faces contribute nothing.
///
/// # Panics
///
/// Panics if a triangle references a vertex outside `vertices`. Meshes
/// built through [`Mesh`](crate::mesh::Mesh) (`loft`, `create_hub`,
/// `Mesh::from_indices`) never do; prefer [`Mesh::compute_normals`](crate::mesh::Mesh::compute_normals).
///
/// # Example
///
/// ```rust
/// use foil_mesh::{compute_normals, Vertex};
/// use glam::DVec3;
///
/// let mut vertices = vec![
///     Vertex::new(DVec3::ZERO),
///     Vertex::new(DVec3::X),
///     Vertex::new(DVec3::Y),
/// ];
/// compute_normals(&mut vertices, &[[0, 1, 2]]);
/// assert_eq!(vertices[0].normal, DVec3::Z);
/// ```
pub fn compute_normals(vertices: &mut [Vertex], triangles: &[[u32; 3]]) {
    debug_assert!(
        triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < vertices.len()),
        "triangle index out of range for {} vertices",
        vertices.len()
    );

    let mut seen = vec![0u32; vertices.len()];
    let mut degenerate = 0usize;

    for v in vertices.iter_mut() {
        v.normal = DVec3::ZERO;
    }

    for &[ia, ib, ic] in triangles {
        let Some(normal) = face_normal(
            vertices[ia as usize].position,
            vertices[ib as usize].position,
            vertices[ic as usize].position,
        ) else {
            degenerate += 1;
            continue;
        };

        for index in [ia, ib, ic] {
            let index = index as usize;
            seen[index] += 1;
            let count = f64::from(seen[index]);
            let vertex = &mut vertices[index];

            if seen[index] == 1 {
                vertex.normal = normal;
            } else {
                // Phong running average
                let blended = vertex.normal * (1.0 - 1.0 / count) + normal * (1.0 / count);
                if let Some(unit) = blended.try_normalize() {
                    vertex.normal = unit;
                }
            }
        }
    }

    if degenerate > 0 {
        tracing::debug!(degenerate, "Skipped degenerate faces during normal synthesis");
    }
}
