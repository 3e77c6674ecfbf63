//! Captured mesh fragment data.
//!
//! A [`MeshFragment`] is one discrete chunk of scanned surface geometry as
//! delivered by the capture subsystem: raw interleaved vertex bytes in a
//! fragment-local frame, u32 triangle indices into those vertices, and a
//! 4x4 transform mapping the local frame into the shared world frame.

use std::sync::Arc;

use crate::math::Mat4;

use super::layout::VertexLayout;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each vertex is a separate point.
    PointList,
    /// Every two vertices form a line.
    LineList,
    /// Vertices form a connected strip of lines.
    LineStrip,
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::PointList => Some(1),
            Self::LineList => Some(2),
            Self::TriangleList => Some(3),
            Self::LineStrip | Self::TriangleStrip => None, // Variable
        }
    }
}

/// Index format for indexed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65535 vertices).
    Uint16,
    /// 32-bit unsigned integers (max ~4 billion vertices).
    #[default]
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// One captured chunk of surface geometry in its local coordinate frame.
///
/// Fragments are immutable after construction; the only mutation is the
/// in-place world transform applied by the export pipeline that owns them.
///
/// # Example
///
/// ```ignore
/// let fragment = MeshFragment::new(VertexLayout::position_only())
///     .with_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
///     .with_indices(&[0, 1, 2])
///     .with_transform(mat4_from_translation(Vec3::new(10.0, 0.0, 0.0)))
///     .with_label("anchor_0");
/// ```
#[derive(Clone)]
pub struct MeshFragment {
    layout: Arc<VertexLayout>,
    vertex_data: Vec<u8>,
    vertex_count: u32,
    indices: Vec<u32>,
    topology: PrimitiveTopology,
    transform: Mat4,
    label: Option<String>,
}

impl MeshFragment {
    /// Create an empty fragment with the given vertex layout.
    pub fn new(layout: Arc<VertexLayout>) -> Self {
        Self {
            layout,
            vertex_data: Vec::new(),
            vertex_count: 0,
            indices: Vec::new(),
            topology: PrimitiveTopology::TriangleList,
            transform: Mat4::identity(),
            label: None,
        }
    }

    /// Set raw interleaved vertex bytes.
    ///
    /// Vertex count is inferred from the data length and layout stride.
    #[must_use]
    pub fn with_vertex_data(mut self, data: Vec<u8>) -> Self {
        let stride = self.layout.stride as usize;
        if stride > 0 {
            self.vertex_count = (data.len() / stride) as u32;
        }
        self.vertex_data = data;
        self
    }

    /// Set vertex data from position triples.
    ///
    /// Convenience for tightly packed position-only layouts.
    #[must_use]
    pub fn with_positions(self, positions: &[[f32; 3]]) -> Self {
        self.with_vertex_data(bytemuck::cast_slice(positions).to_vec())
    }

    /// Set the triangle index list.
    #[must_use]
    pub fn with_indices(mut self, indices: &[u32]) -> Self {
        self.indices = indices.to_vec();
        self
    }

    /// Set the primitive topology.
    #[must_use]
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the local→world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the raw interleaved vertex bytes.
    pub fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    /// Mutable vertex bytes, for the in-place world transform.
    pub(crate) fn vertex_data_mut(&mut self) -> &mut [u8] {
        &mut self.vertex_data
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the triangle index list (fragment-local, u32).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Get the primitive topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Get the local→world transform.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for MeshFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshFragment")
            .field("label", &self.label)
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.indices.len())
            .field("layout", &self.layout.label)
            .finish()
    }
}
