//! Mesh buffer export for GPU rendering.
//!
//! Flattens a [`Mesh`] into interleaved `f32` vertex data and a `u32` index
//! list that a renderer can upload verbatim.

use crate::mesh::Mesh;
use config::constants::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// Per-vertex attribute layout of an exported vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexLayout {
    /// `[px, py, pz, nx, ny, nz]`
    PositionNormal,
    /// `[px, py, pz, nx, ny, nz, r, g, b]`
    PositionNormalColor,
}

impl VertexLayout {
    /// Number of `f32` components per vertex.
    pub fn stride(self) -> usize {
        match self {
            VertexLayout::PositionNormal => 6,
            VertexLayout::PositionNormalColor => 9,
        }
    }
}

/// Mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use foil_mesh::{loft, LoftParams, Profile, StationParams, VertexLayout};
///
/// let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n").unwrap();
/// let params = LoftParams::new(vec![StationParams::new(1.0, 2.0)]);
/// let mut mesh = loft(&profile, &params).unwrap();
/// mesh.compute_normals();
///
/// let buffers = mesh.to_buffers(VertexLayout::PositionNormal);
/// assert_eq!(buffers.vertices.len(), 6 * 6);
/// assert_eq!(buffers.indices.len(), 4 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Attribute layout of `vertices`
    pub layout: VertexLayout,
    /// Interleaved vertex attributes, `layout.stride()` floats per vertex
    pub vertices: Vec<f32>,
    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new(layout: VertexLayout) -> Self {
        Self {
            layout,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.stride()
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Byte distance between consecutive vertices.
    pub fn stride_bytes(&self) -> usize {
        self.layout.stride() * std::mem::size_of::<f32>()
    }
}

impl Mesh {
    /// Exports the mesh to GPU-friendly buffers.
    ///
    /// Converts internal `f64` precision to `f32`. Vertices without a color
    /// are written with [`DEFAULT_COLOR`] when the layout carries color.
    pub fn to_buffers(&self, layout: VertexLayout) -> MeshBuffers {
        let mut buffers = MeshBuffers {
            layout,
            vertices: Vec::with_capacity(self.vertex_count() * layout.stride()),
            indices: self.indices_u32(),
        };

        for v in self.vertices() {
            buffers.vertices.extend_from_slice(&v.position.as_vec3().to_array());
            buffers.vertices.extend_from_slice(&v.normal.as_vec3().to_array());
            if layout == VertexLayout::PositionNormalColor {
                buffers
                    .vertices
                    .extend_from_slice(&v.color.unwrap_or(DEFAULT_COLOR));
            }
        }

        buffers
    }
}
