//! Buffer construction, submesh assembly, and asset aggregation.

use std::sync::Arc;

use crate::material::CpuMaterial;
use crate::mesh::{MeshFragment, PrimitiveTopology, VertexAttributeFormat, VertexLayout};

use super::error::ExportError;
use super::types::{Asset, AssetMesh, Submesh, VertexBuffer};

/// Copy a transformed fragment's vertex records into a flat buffer.
///
/// The copy is exactly `stride * count` bytes with the source layout
/// preserved. Attributes other than position are carried in the bytes but
/// dropped at serialization time; the export is position-only.
pub(crate) fn build_vertex_buffer(fragment: &MeshFragment) -> VertexBuffer {
    VertexBuffer::new(
        fragment.vertex_data().to_vec(),
        fragment.layout().stride,
        fragment.vertex_count(),
    )
}

/// Wrap a fragment's index list into a [`Submesh`] referencing the run's
/// shared material.
///
/// Only [`PrimitiveTopology::TriangleList`] is supported; anything else is
/// rejected rather than silently misinterpreted, as is an index count that
/// is not a multiple of three. Every index must address the paired vertex
/// buffer.
pub(crate) fn build_submesh(
    fragment: &MeshFragment,
    material: &Arc<CpuMaterial>,
) -> Result<Submesh, ExportError> {
    if fragment.topology() != PrimitiveTopology::TriangleList {
        return Err(ExportError::UnsupportedTopology(format!(
            "{:?}",
            fragment.topology()
        )));
    }

    let indices = fragment.indices();
    if indices.len() % 3 != 0 {
        return Err(ExportError::UnsupportedTopology(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }

    let vertex_count = fragment.vertex_count();
    for &index in indices {
        if index >= vertex_count {
            return Err(ExportError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }
    }

    let index_data = bytemuck::cast_slice(indices).to_vec();
    Ok(Submesh::new(
        index_data,
        indices.len() as u32,
        Arc::clone(material),
    ))
}

/// Derive the asset-wide layout descriptor from the first fragment and check
/// that every other fragment matches it.
///
/// The asset carries exactly one layout, so fragments with differing stride
/// or position offset cannot be aggregated.
fn shared_layout(fragments: &[MeshFragment]) -> Result<Arc<VertexLayout>, ExportError> {
    let Some(first) = fragments.first() else {
        return Ok(VertexLayout::position_only());
    };

    let layout = first.layout();
    let position = layout.position_attribute().ok_or_else(|| {
        ExportError::FormatMismatch(format!("layout {:?} has no position attribute", layout.label))
    })?;
    if position.format != VertexAttributeFormat::Float3 {
        return Err(ExportError::FormatMismatch(format!(
            "position attribute is {:?}, expected Float3",
            position.format
        )));
    }

    for (i, fragment) in fragments.iter().enumerate().skip(1) {
        let other = fragment.layout();
        let other_position = other.position_attribute().ok_or_else(|| {
            ExportError::FormatMismatch(format!("fragment {i} layout has no position attribute"))
        })?;
        if other.stride != layout.stride || other_position.offset != position.offset {
            return Err(ExportError::FormatMismatch(format!(
                "fragment {i} layout (stride {}, position offset {}) differs from the first \
                 fragment (stride {}, position offset {})",
                other.stride, other_position.offset, layout.stride, position.offset
            )));
        }
    }

    Ok(Arc::clone(layout))
}

/// Aggregate per-fragment (vertex buffer, submesh) pairs into a single
/// [`Asset`], in capture order.
///
/// Creates the run's single shared material. Zero fragments produce an
/// empty asset; the writer still emits a valid, geometry-empty file.
pub(crate) fn aggregate_fragments(fragments: &[MeshFragment]) -> Result<Asset, ExportError> {
    let layout = shared_layout(fragments)?;
    let material = Arc::new(CpuMaterial::placeholder_gray());

    let mut meshes = Vec::with_capacity(fragments.len());
    for (i, fragment) in fragments.iter().enumerate() {
        let vertex_buffer = build_vertex_buffer(fragment);
        let submesh = build_submesh(fragment, &material)?;
        meshes.push(AssetMesh {
            vertex_buffer,
            submeshes: vec![submesh],
            name: fragment
                .label()
                .map(String::from)
                .unwrap_or_else(|| format!("fragment_{i}")),
        });
    }

    log::debug!(
        "aggregated {} fragments into asset ({} vertices, {} triangles)",
        fragments.len(),
        meshes
            .iter()
            .map(|m| m.vertex_buffer.count())
            .sum::<u32>(),
        meshes
            .iter()
            .flat_map(|m| m.submeshes.iter())
            .map(|s| s.triangle_count())
            .sum::<u32>(),
    );

    Ok(Asset::new(layout, material, meshes))
}
