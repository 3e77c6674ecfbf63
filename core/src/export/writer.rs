//! Asset serialization and atomic file writing.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ExportError;
use super::types::{Asset, ExportFormat};

/// Serialize an asset and write it to `path`.
///
/// The format must already be resolved (see [`ExportFormat`]); serialization
/// happens fully in memory and the bytes are written to a temp file next to
/// the destination, then renamed into place. On failure the temp file is
/// removed and no partial file remains at the destination.
pub(crate) fn write_asset(
    asset: &Asset,
    format: ExportFormat,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let text = match format {
        ExportFormat::Obj => encode_obj(asset),
    };

    write_atomic(path, text.as_bytes())?;
    Ok(path.to_path_buf())
}

/// Encode an asset as Wavefront OBJ text.
///
/// Output is deterministic for identical input: no timestamps, stable
/// fragment/submesh ordering, and Rust's shortest-roundtrip float
/// formatting. Each fragment becomes an `o` object; faces are 1-based with
/// a running vertex offset since OBJ has a single global vertex list while
/// submesh indices stay fragment-local in memory.
pub(crate) fn encode_obj(asset: &Asset) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# ScanForge OBJ export");
    let _ = writeln!(
        out,
        "# vertices: {} triangles: {}",
        asset.vertex_count(),
        asset.triangle_count()
    );

    let offset = asset.layout().position_attribute().map_or(0, |a| a.offset) as usize;

    let mut base: u32 = 1; // OBJ face indices are 1-based
    for mesh in asset.meshes() {
        let _ = writeln!(out, "o {}", mesh.name);

        let buffer = &mesh.vertex_buffer;
        let stride = buffer.stride() as usize;
        let data = buffer.data();
        for i in 0..buffer.count() as usize {
            let b = i * stride + offset;
            let x = f32::from_le_bytes([data[b], data[b + 1], data[b + 2], data[b + 3]]);
            let y = f32::from_le_bytes([data[b + 4], data[b + 5], data[b + 6], data[b + 7]]);
            let z = f32::from_le_bytes([data[b + 8], data[b + 9], data[b + 10], data[b + 11]]);
            let _ = writeln!(out, "v {x} {y} {z}");
        }

        for submesh in &mesh.submeshes {
            if let Some(name) = &submesh.material().name {
                let _ = writeln!(out, "usemtl {name}");
            }
            let indices = submesh.indices_u32();
            for tri in indices.chunks_exact(3) {
                let _ = writeln!(out, "f {} {} {}", base + tri[0], base + tri[1], base + tri[2]);
            }
        }

        base += buffer.count();
    }

    out
}

/// Write bytes to a temp file beside `path` and rename it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "export".into());
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::builder::aggregate_fragments;
    use crate::mesh::{MeshFragment, VertexLayout};

    #[test]
    fn empty_asset_encodes_header_only() {
        let asset = aggregate_fragments(&[]).unwrap();
        let text = encode_obj(&asset);
        assert!(text.starts_with("# ScanForge OBJ export"));
        assert!(text.contains("# vertices: 0 triangles: 0"));
        assert!(!text.contains("\nv "));
        assert!(!text.contains("\nf "));
    }

    #[test]
    fn single_triangle_encoding() {
        let fragments = vec![MeshFragment::new(VertexLayout::position_only())
            .with_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
            .with_indices(&[0, 1, 2])
            .with_label("tri")];
        let asset = aggregate_fragments(&fragments).unwrap();
        let text = encode_obj(&asset);

        assert!(text.contains("o tri\n"));
        assert!(text.contains("usemtl scan_gray\n"));
        assert!(text.contains("v 0 0 0\n"));
        assert!(text.contains("v 1 0 0\n"));
        assert!(text.contains("f 1 2 3\n"));
    }

    #[test]
    fn face_indices_offset_across_fragments() {
        let tri = MeshFragment::new(VertexLayout::position_only())
            .with_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
            .with_indices(&[0, 1, 2]);
        let asset = aggregate_fragments(&[tri.clone(), tri]).unwrap();
        let text = encode_obj(&asset);

        // Second fragment's triangle starts after the first three vertices
        assert!(text.contains("f 1 2 3\n"));
        assert!(text.contains("f 4 5 6\n"));
    }

    #[test]
    fn write_failure_leaves_no_file() {
        let asset = aggregate_fragments(&[]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_subdir").join("scan.obj");

        let err = write_asset(&asset, ExportFormat::Obj, &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!path.exists());
        assert!(!dir.path().join("missing_subdir").exists());
    }
}
