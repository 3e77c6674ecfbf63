//! In-place world-space transformation of fragment vertices.

use crate::math::{transform_point, Vec3};
use crate::mesh::{MeshFragment, VertexAttributeFormat};

use super::error::ExportError;

/// Transform every vertex position of a fragment from its local frame into
/// the world frame, in place.
///
/// Each position `p` is replaced by the first three components of
/// `transform · (p.x, p.y, p.z, 1)`. Stride and attribute offsets are
/// preserved so downstream buffer construction can reuse the fragment's
/// layout descriptor. Vertices are processed in order `0..count`, which
/// keeps output deterministic for identical input.
///
/// All layout validation happens before the first write; on error the
/// fragment's bytes are untouched.
pub(crate) fn transform_fragment_to_world(fragment: &mut MeshFragment) -> Result<(), ExportError> {
    let layout = fragment.layout().clone();
    let position = layout.position_attribute().ok_or_else(|| {
        ExportError::FormatMismatch(format!(
            "layout {:?} has no position attribute",
            layout.label
        ))
    })?;

    if position.format != VertexAttributeFormat::Float3 {
        return Err(ExportError::FormatMismatch(format!(
            "position attribute is {:?}, expected Float3",
            position.format
        )));
    }

    let stride = layout.stride as usize;
    let offset = position.offset as usize;
    if offset + 12 > stride {
        return Err(ExportError::FormatMismatch(format!(
            "position at offset {offset} does not fit in stride {stride}"
        )));
    }

    let count = fragment.vertex_count() as usize;
    let expected_len = stride * count;
    if fragment.vertex_data().len() != expected_len {
        return Err(ExportError::FormatMismatch(format!(
            "vertex buffer is {} bytes, expected {expected_len} ({count} vertices * {stride} stride)",
            fragment.vertex_data().len()
        )));
    }

    let matrix = *fragment.transform();
    let data = fragment.vertex_data_mut();

    for i in 0..count {
        let base = i * stride + offset;
        let mut components = [0.0f32; 3];
        for (c, value) in components.iter_mut().enumerate() {
            let b = base + c * 4;
            *value = f32::from_le_bytes([data[b], data[b + 1], data[b + 2], data[b + 3]]);
        }

        let world = transform_point(&matrix, Vec3::from_row_slice(&components));

        for (c, value) in [world.x, world.y, world.z].into_iter().enumerate() {
            let b = base + c * 4;
            data[b..b + 4].copy_from_slice(&value.to_le_bytes());
        }
    }

    Ok(())
}
