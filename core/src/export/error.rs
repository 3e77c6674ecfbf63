//! Error types for the export pipeline.

use std::path::PathBuf;

/// Errors that can occur while converting fragments and writing the asset.
///
/// Every variant aborts the whole export; there is no partial-success mode
/// and nothing is retried internally.
#[derive(Debug)]
pub enum ExportError {
    /// Vertex data does not match the expected single-precision 3-float
    /// position layout.
    FormatMismatch(String),
    /// Non-triangle primitive data.
    UnsupportedTopology(String),
    /// The requested export format is not available. Raised before any I/O.
    UnsupportedFormat(String),
    /// A triangle index points past the end of its own vertex buffer.
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Vertex count of the paired buffer.
        vertex_count: u32,
    },
    /// File system failure while writing the asset.
    Io {
        /// Destination path of the failed write.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatMismatch(msg) => write!(f, "vertex format mismatch: {msg}"),
            Self::UnsupportedTopology(msg) => write!(f, "unsupported topology: {msg}"),
            Self::UnsupportedFormat(msg) => write!(f, "unsupported export format: {msg}"),
            Self::IndexOutOfBounds {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "index {index} out of bounds for vertex buffer of {vertex_count} vertices"
                )
            }
            Self::Io { path, source } => {
                write!(f, "export I/O error at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
