//! Data types for the exportable asset graph.

use std::path::Path;
use std::sync::Arc;

use crate::material::CpuMaterial;
use crate::mesh::{IndexFormat, PrimitiveTopology, VertexLayout};

use super::error::ExportError;

/// Interchange formats the exporter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Wavefront OBJ (text).
    Obj,
}

impl ExportFormat {
    /// File extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
        }
    }

    /// Resolve a format from a file extension.
    ///
    /// Fails with [`ExportError::UnsupportedFormat`] for unknown extensions,
    /// before any file is touched.
    pub fn from_extension(ext: &str) -> Result<Self, ExportError> {
        match ext.to_ascii_lowercase().as_str() {
            "obj" => Ok(Self::Obj),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve a format from a destination path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ExportError::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;
        Self::from_extension(ext)
    }
}

/// Flat byte buffer of world-space vertex records.
///
/// Same stride and attribute offsets as the source fragment's format; only
/// the position attribute is meaningful to the exporter.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    data: Vec<u8>,
    stride: u32,
    count: u32,
}

impl VertexBuffer {
    pub(crate) fn new(data: Vec<u8>, stride: u32, count: u32) -> Self {
        Self {
            data,
            stride,
            count,
        }
    }

    /// Raw vertex bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte distance between consecutive vertex records.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of vertices.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A group of triangle indices into one paired vertex buffer, with a shared
/// material reference.
#[derive(Debug, Clone)]
pub struct Submesh {
    index_data: Vec<u8>,
    index_count: u32,
    index_format: IndexFormat,
    topology: PrimitiveTopology,
    material: Arc<CpuMaterial>,
}

impl Submesh {
    pub(crate) fn new(index_data: Vec<u8>, index_count: u32, material: Arc<CpuMaterial>) -> Self {
        Self {
            index_data,
            index_count,
            index_format: IndexFormat::Uint32,
            topology: PrimitiveTopology::TriangleList,
            material,
        }
    }

    /// Raw index bytes (little-endian u32).
    pub fn index_data(&self) -> &[u8] {
        &self.index_data
    }

    /// Number of indices.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Index format (always [`IndexFormat::Uint32`]).
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Primitive topology (always [`PrimitiveTopology::TriangleList`]).
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// The shared material this submesh references.
    pub fn material(&self) -> &Arc<CpuMaterial> {
        &self.material
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }

    /// Decode the index bytes back into u32 values.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.index_data
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }
}

/// One fragment's worth of exportable geometry: a world-space vertex buffer
/// paired with its submeshes.
#[derive(Debug, Clone)]
pub struct AssetMesh {
    /// World-space vertex buffer.
    pub vertex_buffer: VertexBuffer,
    /// Index groups into `vertex_buffer`. Indices are fragment-local; no
    /// cross-fragment index space exists.
    pub submeshes: Vec<Submesh>,
    /// Name carried into the output file.
    pub name: String,
}

/// The aggregate exportable asset: ordered per-fragment geometry plus the
/// shared vertex layout descriptor and the run's single material.
#[derive(Debug, Clone)]
pub struct Asset {
    layout: Arc<VertexLayout>,
    material: Arc<CpuMaterial>,
    meshes: Vec<AssetMesh>,
}

impl Asset {
    pub(crate) fn new(
        layout: Arc<VertexLayout>,
        material: Arc<CpuMaterial>,
        meshes: Vec<AssetMesh>,
    ) -> Self {
        Self {
            layout,
            material,
            meshes,
        }
    }

    /// Vertex layout descriptor shared by all vertex buffers.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// The single material shared by all submeshes.
    pub fn material(&self) -> &Arc<CpuMaterial> {
        &self.material
    }

    /// Per-fragment geometry, in capture order.
    pub fn meshes(&self) -> &[AssetMesh] {
        &self.meshes
    }

    /// True if the asset holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total vertex count across all buffers.
    pub fn vertex_count(&self) -> u32 {
        self.meshes.iter().map(|m| m.vertex_buffer.count()).sum()
    }

    /// Total triangle count across all submeshes.
    pub fn triangle_count(&self) -> u32 {
        self.meshes
            .iter()
            .flat_map(|m| m.submeshes.iter())
            .map(|s| s.triangle_count())
            .sum()
    }
}
