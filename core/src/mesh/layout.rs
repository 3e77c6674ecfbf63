//! Vertex layout description.
//!
//! A [`VertexLayout`] describes one interleaved vertex buffer: the byte
//! stride between consecutive vertex records and the byte offset and format
//! of each attribute within a record. The exporter only consumes the
//! position attribute, but layouts can describe additional attributes so a
//! capture source's native format is representable as-is.

use std::sync::Arc;

/// What a vertex attribute represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// 3D position.
    Position,
    /// Surface normal.
    Normal,
    /// Vertex color.
    Color,
    /// Texture coordinates, set 0.
    TexCoord0,
}

/// Data format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Single f32.
    Float,
    /// Two f32 components.
    Float2,
    /// Three f32 components.
    Float3,
    /// Four f32 components.
    Float4,
}

impl VertexAttributeFormat {
    /// Size in bytes of one attribute value.
    pub fn size(&self) -> u32 {
        match self {
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }
}

/// One attribute within an interleaved vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// What this attribute represents.
    pub semantic: VertexAttributeSemantic,
    /// Data format.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex record.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create an attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// Float3 position attribute at the given offset.
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// Float3 normal attribute at the given offset.
    pub fn normal(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Normal,
            VertexAttributeFormat::Float3,
            offset,
        )
    }
}

/// Layout of one interleaved vertex buffer.
///
/// # Example
///
/// ```ignore
/// let layout = VertexLayout::new(24)
///     .with_attribute(VertexAttribute::position(0))
///     .with_attribute(VertexAttribute::normal(12))
///     .with_label("position_normal");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    /// Byte distance between consecutive vertex records.
    pub stride: u32,
    /// Attributes within one record.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create an empty layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Find an attribute by semantic.
    pub fn attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    /// The position attribute, if the layout has one.
    pub fn position_attribute(&self) -> Option<&VertexAttribute> {
        self.attribute(VertexAttributeSemantic::Position)
    }

    /// Tightly packed position-only layout (12 bytes per vertex).
    pub fn position_only() -> Arc<Self> {
        Arc::new(
            Self::new(12)
                .with_attribute(VertexAttribute::position(0))
                .with_label("position_only"),
        )
    }

    /// Interleaved position + normal layout (24 bytes per vertex).
    pub fn position_normal() -> Arc<Self> {
        Arc::new(
            Self::new(24)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::normal(12))
                .with_label("position_normal"),
        )
    }
}
