//! CPU-side material description.
//!
//! The export pipeline applies one flat placeholder surface to everything it
//! writes: a single [`CpuMaterial`] is created per export run and shared by
//! reference (`Arc`) across all submeshes, never duplicated.

/// CPU-side material definition.
///
/// # Example
///
/// ```ignore
/// use scanforge_core::material::CpuMaterial;
///
/// let mat = CpuMaterial::new()
///     .with_name("scan_gray")
///     .with_base_color([0.5, 0.5, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CpuMaterial {
    /// Material name.
    pub name: Option<String>,
    /// Base color factor `[r, g, b, a]` (linear).
    pub base_color: [f32; 4],
    /// Metallic factor (0.0–1.0).
    pub metallic: f32,
    /// Roughness factor (0.0–1.0).
    pub roughness: f32,
    /// Whether the material is double-sided.
    pub double_sided: bool,
}

impl CpuMaterial {
    /// Creates a new material (white, rough, single-sided).
    pub fn new() -> Self {
        Self {
            name: None,
            base_color: [1.0, 1.0, 1.0, 1.0],
            metallic: 0.0,
            roughness: 1.0,
            double_sided: false,
        }
    }

    /// The neutral gray placeholder applied to exported scan geometry.
    pub fn placeholder_gray() -> Self {
        Self::new()
            .with_name("scan_gray")
            .with_base_color([0.5, 0.5, 0.5, 1.0])
    }

    /// Set the material name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the base color factor.
    #[must_use]
    pub fn with_base_color(mut self, base_color: [f32; 4]) -> Self {
        self.base_color = base_color;
        self
    }

    /// Set the metallic factor.
    #[must_use]
    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    /// Set the roughness factor.
    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set double-sided rendering.
    #[must_use]
    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }
}

impl Default for CpuMaterial {
    fn default() -> Self {
        Self::new()
    }
}
