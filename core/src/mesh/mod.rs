//! CPU-side mesh types for captured scan geometry.
//!
//! This module provides:
//!
//! - [`VertexLayout`] - Explicit stride/offset descriptor for interleaved vertex data
//! - [`MeshFragment`] - One captured chunk of surface geometry with its local→world transform
//! - [`PrimitiveTopology`] / [`IndexFormat`] - How indices assemble into primitives

mod fragment;
mod layout;

pub use fragment::{IndexFormat, MeshFragment, PrimitiveTopology};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
