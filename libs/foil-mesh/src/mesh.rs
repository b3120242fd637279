//! # Mesh Data Structure
//!
//! Core mesh representation: vertices carrying position, shading normal and
//! optional color, plus counter-clockwise triangles indexing into them.

use crate::error::{MeshError, Result};
use crate::ops::normals;
use config::constants::{MAX_VERTICES, VERTEX_MERGE_EPSILON};
use glam::{DMat4, DVec3};

/// A single mesh vertex.
///
/// The normal starts at zero and is only written by normal synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position (f64 for precision)
    pub position: DVec3,
    /// Shading normal, zero until synthesized
    pub normal: DVec3,
    /// Optional vertex color (RGB, f32 for GPU)
    pub color: Option<[f32; 3]>,
}

impl Vertex {
    /// Creates an uncolored vertex with a zero normal.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            normal: DVec3::ZERO,
            color: None,
        }
    }

    /// Creates a vertex with an optional color and a zero normal.
    pub fn with_color(position: DVec3, color: Option<[f32; 3]>) -> Self {
        Self {
            position,
            normal: DVec3::ZERO,
            color,
        }
    }
}

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU buffer boundary.
///
/// # Example
///
/// ```rust
/// use foil_mesh::{Mesh, Vertex};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vertex::new(DVec3::new(0.0, 0.0, 0.0)));
/// mesh.add_vertex(Vertex::new(DVec3::new(1.0, 0.0, 0.0)));
/// mesh.add_vertex(Vertex::new(DVec3::new(0.0, 1.0, 0.0)));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from a vertex buffer and a flat index buffer.
    ///
    /// The index buffer must hold whole triangles and reference only
    /// existing vertices.
    pub fn from_indices(vertices: Vec<Vertex>, indices: &[u32]) -> Result<Self> {
        if vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices.len(),
                max: MAX_VERTICES,
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_topology(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::invalid_topology(format!(
                "index {bad} out of range for {} vertices",
                vertices.len()
            )));
        }

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> &Vertex {
        &self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Synthesizes smooth shading normals in place.
    ///
    /// See [`normals::compute_normals`] for the averaging rule.
    pub fn compute_normals(&mut self) {
        normals::compute_normals(&mut self.vertices, &self.triangles);
    }

    /// Returns the flattened index buffer `[i0, i1, i2, i0, i1, i2, ...]`.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..].iter().fold(
            (first.position, first.position),
            |(min, max), v| (min.min(v.position), max.max(v.position)),
        )
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Non-zero normals follow the inverse transpose and are re-normalized;
    /// zero normals stay zero.
    pub fn transform(&mut self, matrix: &DMat4) {
        let normal_matrix = matrix.inverse().transpose();
        for v in &mut self.vertices {
            v.position = matrix.transform_point3(v.position);
            if v.normal != DVec3::ZERO {
                v.normal = normal_matrix.transform_vector3(v.normal).normalize_or_zero();
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            v.position += offset;
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Fails with `TooManyVertices` if the combined mesh could not be
    /// indexed with `u32`; `self` is left unchanged in that case.
    pub fn merge(&mut self, other: &Mesh) -> Result<()> {
        check_vertex_total(self.vertices.len(), other.vertices.len())?;
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
        Ok(())
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize].position;
            let v1 = self.vertices[tri[1] as usize].position;
            let v2 = self.vertices[tri[2] as usize].position;
            (v1 - v0).cross(v2 - v0).length() >= VERTEX_MERGE_EPSILON
        })
    }

    /// Returns true if every index references an existing vertex.
    ///
    /// Unlike [`Mesh::validate`] this tolerates zero-area triangles, which
    /// real airfoil data produces at a sharp trailing edge.
    pub fn indices_in_bounds(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < vertex_count)
    }
}

/// Checks that `current + added` vertices stay addressable by `u32` indices.
pub(crate) fn check_vertex_total(current: usize, added: usize) -> Result<()> {
    match current.checked_add(added) {
        Some(total) if total <= MAX_VERTICES => Ok(()),
        _ => Err(MeshError::TooManyVertices {
            count: current.saturating_add(added),
            max: MAX_VERTICES,
        }),
    }
}
