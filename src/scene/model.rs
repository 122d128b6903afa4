//! The owned garment scene-graph data model.
use std::sync::Arc;

use smallvec::SmallVec;

use crate::foundation::core::Rgb8;
use crate::texture::synth::SynthesizedTexture;

/// Roughness applied to a painted slot when the original carried none.
pub const DEFAULT_ROUGHNESS: f32 = 0.6;

/// Metalness applied to a painted slot when the original carried none.
pub const DEFAULT_METALNESS: f32 = 0.05;

/// Alpha cutoff on painted materials.
pub const PAINT_ALPHA_CUTOFF: f32 = 0.1;

/// Constant emissive lift on painted materials, keeps the garment readable
/// under low ambient light.
pub const PAINT_EMISSIVE_INTENSITY: f32 = 0.1;

/// Shading model of a material slot, as reported by the asset loader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// The standard physically-based model (metallic/roughness).
    #[default]
    Standard,
    /// Classic specular shading.
    Phong,
    /// Unlit flat shading.
    Basic,
}

/// One material slot: a named binding point describing surface appearance.
#[derive(Clone, Debug)]
pub struct Material {
    /// Slot name from the source asset; loaders may leave it unset.
    pub name: Option<String>,
    /// Shading model.
    pub kind: MaterialKind,
    /// Uniform base color multiplier.
    pub base_color: Rgb8,
    /// Microfacet roughness, when the source asset provided one.
    pub roughness: Option<f32>,
    /// Metalness, when the source asset provided one.
    pub metalness: Option<f32>,
    /// Bound color texture, if any. Shared, immutable.
    pub texture: Option<Arc<SynthesizedTexture>>,
    /// Whether alpha blending is enabled.
    pub transparent: bool,
    /// Fragments below this alpha are discarded.
    pub alpha_cutoff: f32,
    /// Emissive contribution of the base color.
    pub emissive_intensity: f32,
}

impl Material {
    /// A plain slot with the given name and shading model, no texture.
    pub fn new(name: Option<String>, kind: MaterialKind) -> Self {
        Self {
            name,
            kind,
            base_color: Rgb8::new(255, 255, 255),
            roughness: None,
            metalness: None,
            texture: None,
            transparent: false,
            alpha_cutoff: 0.0,
            emissive_intensity: 0.0,
        }
    }

    /// The replacement slot for a matched paint target.
    ///
    /// Binds `texture`, enables transparency with the standard cutoff, adds
    /// the constant emissive lift, and carries roughness/metalness over from
    /// the original slot, falling back to `defaults` where the original had
    /// none.
    pub fn painted(
        texture: Arc<SynthesizedTexture>,
        original: &Material,
        defaults: PaintDefaults,
    ) -> Self {
        Self {
            name: original.name.clone(),
            kind: MaterialKind::Standard,
            base_color: Rgb8::new(255, 255, 255),
            roughness: Some(original.roughness.unwrap_or(defaults.roughness)),
            metalness: Some(original.metalness.unwrap_or(defaults.metalness)),
            texture: Some(texture),
            transparent: true,
            alpha_cutoff: PAINT_ALPHA_CUTOFF,
            emissive_intensity: PAINT_EMISSIVE_INTENSITY,
        }
    }
}

/// Fallback surface parameters for painted slots whose original material
/// declared none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintDefaults {
    /// Fallback roughness.
    pub roughness: f32,
    /// Fallback metalness.
    pub metalness: f32,
}

impl Default for PaintDefaults {
    fn default() -> Self {
        Self {
            roughness: DEFAULT_ROUGHNESS,
            metalness: DEFAULT_METALNESS,
        }
    }
}

/// Material slots of one mesh: a single binding or an ordered list.
///
/// The distinction matters to the rebinding heuristic, so it is preserved
/// rather than flattened to a one-element list.
#[derive(Clone, Debug)]
pub enum MaterialBinding {
    /// The mesh has exactly one material.
    Single(Material),
    /// The mesh has an ordered material array.
    List(SmallVec<[Material; 2]>),
}

impl MaterialBinding {
    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(slots) => slots.len(),
        }
    }

    /// Borrow the slot at `index`.
    pub fn slot(&self, index: usize) -> Option<&Material> {
        match self {
            Self::Single(mat) => (index == 0).then_some(mat),
            Self::List(slots) => slots.get(index),
        }
    }
}

/// One mesh node of the garment scene.
#[derive(Clone, Debug)]
pub struct MeshNode {
    /// Node name from the source asset.
    pub name: String,
    /// The mesh's material slots.
    pub binding: MaterialBinding,
}

/// An owned garment scene graph.
///
/// `Clone` is a deep copy: the shared cached base asset is never rebound in
/// place, every customization update paints a fresh clone.
#[derive(Clone, Debug, Default)]
pub struct GarmentScene {
    /// Scene name from the source asset.
    pub name: Option<String>,
    /// Mesh nodes in traversal order.
    pub meshes: Vec<MeshNode>,
}

impl GarmentScene {
    /// An empty scene with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            meshes: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
