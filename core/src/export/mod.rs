//! Export pipeline: surface-scan mesh fragments to a portable asset file.
//!
//! The pipeline takes captured [`MeshFragment`]s, bakes each fragment's
//! transform into its vertex positions, aggregates the results into a single
//! [`Asset`], and writes it to disk in an interchange format. The whole run
//! either produces one complete file or fails with an [`ExportError`] and
//! leaves nothing behind.
//!
//! ```no_run
//! use scanforge_core::export;
//! use scanforge_core::mesh::{MeshFragment, VertexLayout};
//!
//! let fragment = MeshFragment::new(VertexLayout::position_only())
//!     .with_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
//!     .with_indices(&[0, 1, 2]);
//! export::export_fragments_to(vec![fragment], "scan.obj")?;
//! # Ok::<(), scanforge_core::export::ExportError>(())
//! ```

mod builder;
mod error;
mod transform;
pub mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use types::{Asset, AssetMesh, ExportFormat, Submesh, VertexBuffer};

use std::path::{Path, PathBuf};

use crate::mesh::MeshFragment;

/// Transform, aggregate, and write fragments to `path` in the given format.
///
/// Fragments are consumed because their vertex positions are rewritten to
/// world space in place. Order of the input is preserved in the output file.
/// An empty input produces a valid file with no geometry. Returns the path
/// of the written file.
pub fn export_fragments(
    fragments: Vec<MeshFragment>,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let asset = build_scan_asset(fragments)?;
    export_asset(&asset, format, path)
}

/// Like [`export_fragments`], resolving the format from the path extension.
///
/// Unknown extensions fail with [`ExportError::UnsupportedFormat`] before
/// any fragment is transformed or any file is touched.
pub fn export_fragments_to(
    fragments: Vec<MeshFragment>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    export_fragments(fragments, format, path)
}

/// Transform fragments to world space and aggregate them into an [`Asset`]
/// without touching the file system.
pub fn build_scan_asset(mut fragments: Vec<MeshFragment>) -> Result<Asset, ExportError> {
    for fragment in &mut fragments {
        transform::transform_fragment_to_world(fragment)?;
    }
    builder::aggregate_fragments(&fragments)
}

/// Serialize an already-built asset to text without touching the file
/// system.
pub fn encode_asset(asset: &Asset, format: ExportFormat) -> String {
    match format {
        ExportFormat::Obj => writer::encode_obj(asset),
    }
}

/// Write an already-built asset to `path` in the given format.
pub fn export_asset(
    asset: &Asset,
    format: ExportFormat,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let written = writer::write_asset(asset, format, path)?;
    log::info!(
        "exported {} meshes ({} vertices, {} triangles) to {}",
        asset.meshes().len(),
        asset.vertex_count(),
        asset.triangle_count(),
        written.display()
    );
    Ok(written)
}
