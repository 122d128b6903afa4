//! Material rebinding: binding a synthesized texture onto a scene clone.
use std::sync::Arc;

use crate::scene::model::{
    GarmentScene, Material, MaterialBinding, MaterialKind, PaintDefaults,
};
use crate::texture::synth::SynthesizedTexture;

/// Name fragments that mark a slot as the paintable garment surface.
/// Matched case-sensitively.
pub const PAINT_NAME_TOKENS: [&str; 5] = ["Image", "Material", "Fabric", "Cloth", "Vest"];

/// Additional name fragment matched case-insensitively.
pub const PAINT_NAME_TOKEN_CI: &str = "main";

/// Everything the paint-target predicate is allowed to look at.
///
/// A pure value extracted from a slot; the matcher never inspects live
/// material state.
#[derive(Clone, Copy, Debug)]
pub struct MaterialDescriptor<'a> {
    /// Slot name, if the asset named it.
    pub name: Option<&'a str>,
    /// Shading model.
    pub kind: MaterialKind,
    /// Position of this slot in the mesh's material list.
    pub slot_index: usize,
    /// Total number of slots on the mesh.
    pub slot_count: usize,
    /// Whether the mesh binds a single material rather than a list.
    pub single_slot: bool,
}

/// The rule that qualified a slot for rebinding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintRule {
    /// The slot has no name (or an empty one).
    UnnamedSlot,
    /// The slot name contains a token from the fixed set.
    NameToken,
    /// First slot of a multi-material list, taken as the garment surface.
    FirstSlotFallback,
    /// A single-material mesh using the standard physically-based model.
    SingleStandard,
}

const RULES: [PaintRule; 4] = [
    PaintRule::UnnamedSlot,
    PaintRule::NameToken,
    PaintRule::FirstSlotFallback,
    PaintRule::SingleStandard,
];

fn rule_matches(rule: PaintRule, desc: &MaterialDescriptor<'_>) -> bool {
    match rule {
        PaintRule::UnnamedSlot => desc.name.is_none_or(str::is_empty),
        PaintRule::NameToken => desc.name.is_some_and(|name| {
            PAINT_NAME_TOKENS.iter().any(|t| name.contains(t))
                || name.to_ascii_lowercase().contains(PAINT_NAME_TOKEN_CI)
        }),
        PaintRule::FirstSlotFallback => !desc.single_slot && desc.slot_index == 0,
        PaintRule::SingleStandard => desc.single_slot && desc.kind == MaterialKind::Standard,
    }
}

/// First matching rule for a slot, or `None` when the slot is left alone.
///
/// Rules are evaluated in a fixed order, first match wins.
pub fn paint_target_rule(desc: &MaterialDescriptor<'_>) -> Option<PaintRule> {
    RULES.iter().copied().find(|&r| rule_matches(r, desc))
}

/// Whether a slot is a rebinding target.
pub fn is_paint_target(desc: &MaterialDescriptor<'_>) -> bool {
    paint_target_rule(desc).is_some()
}

/// Rebind the garment surface of `base` to `texture`, on a fresh clone.
///
/// Equivalent to [`rebind_with_defaults`] with the standard paint defaults.
pub fn rebind_garment_materials(
    base: &GarmentScene,
    texture: &Arc<SynthesizedTexture>,
) -> GarmentScene {
    rebind_with_defaults(base, texture, PaintDefaults::default())
}

/// Rebind with explicit fallback surface parameters.
///
/// Deep-clones `base`, walks every mesh, and substitutes each slot the
/// matching heuristic accepts with a painted material bound to `texture`.
/// Unmatched slots are untouched. A scene with no meshes or no matching
/// slot still succeeds: the clone comes back visually unchanged, and the
/// miss is logged for asset-onboarding diagnostics.
#[tracing::instrument(skip(base, texture), fields(scene = base.name.as_deref().unwrap_or("<unnamed>")))]
pub fn rebind_with_defaults(
    base: &GarmentScene,
    texture: &Arc<SynthesizedTexture>,
    defaults: PaintDefaults,
) -> GarmentScene {
    let mut scene = base.clone();
    let mut replaced = 0usize;

    for mesh in &mut scene.meshes {
        match &mut mesh.binding {
            MaterialBinding::Single(mat) => {
                let desc = MaterialDescriptor {
                    name: mat.name.as_deref(),
                    kind: mat.kind,
                    slot_index: 0,
                    slot_count: 1,
                    single_slot: true,
                };
                if is_paint_target(&desc) {
                    *mat = Material::painted(texture.clone(), mat, defaults);
                    replaced += 1;
                }
            }
            MaterialBinding::List(slots) => {
                let slot_count = slots.len();
                for (slot_index, mat) in slots.iter_mut().enumerate() {
                    let desc = MaterialDescriptor {
                        name: mat.name.as_deref(),
                        kind: mat.kind,
                        slot_index,
                        slot_count,
                        single_slot: false,
                    };
                    if is_paint_target(&desc) {
                        *mat = Material::painted(texture.clone(), mat, defaults);
                        replaced += 1;
                    }
                }
            }
        }
    }

    if replaced == 0 {
        // Advisory only: the garment renders with its original appearance.
        tracing::warn!(
            meshes = scene.meshes.len(),
            "no material matched the paint heuristic"
        );
    } else {
        tracing::debug!(replaced, "rebound garment materials");
    }

    scene
}

#[cfg(test)]
#[path = "../../tests/unit/scene/rebind.rs"]
mod tests;
