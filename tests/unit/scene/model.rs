use std::sync::Arc;

use super::*;
use crate::effects::fabric::FabricNoise;
use crate::foundation::core::{LogoScale, Placement};
use crate::texture::synth::synthesize_texture;

fn any_texture() -> Arc<SynthesizedTexture> {
    Arc::new(synthesize_texture(
        Rgb8::new(0x80, 0x80, 0x80),
        None,
        Placement::clamped(0.0, 0.0),
        LogoScale::clamped(0.4),
        FabricNoise::Seeded(1),
    ))
}

#[test]
fn painted_material_binds_texture_with_the_standard_flags() {
    let original = Material::new(Some("Fabric_01".to_owned()), MaterialKind::Phong);
    let tex = any_texture();
    let painted = Material::painted(tex.clone(), &original, PaintDefaults::default());

    assert_eq!(painted.name.as_deref(), Some("Fabric_01"));
    assert_eq!(painted.kind, MaterialKind::Standard);
    assert!(painted.transparent);
    assert_eq!(painted.alpha_cutoff, PAINT_ALPHA_CUTOFF);
    assert_eq!(painted.emissive_intensity, PAINT_EMISSIVE_INTENSITY);
    assert!(Arc::ptr_eq(painted.texture.as_ref().unwrap(), &tex));
}

#[test]
fn painted_material_preserves_declared_surface_parameters() {
    let mut original = Material::new(None, MaterialKind::Standard);
    original.roughness = Some(0.9);
    original.metalness = Some(0.3);

    let painted = Material::painted(any_texture(), &original, PaintDefaults::default());
    assert_eq!(painted.roughness, Some(0.9));
    assert_eq!(painted.metalness, Some(0.3));
}

#[test]
fn painted_material_defaults_missing_surface_parameters() {
    let original = Material::new(None, MaterialKind::Standard);
    let painted = Material::painted(any_texture(), &original, PaintDefaults::default());
    assert_eq!(painted.roughness, Some(DEFAULT_ROUGHNESS));
    assert_eq!(painted.metalness, Some(DEFAULT_METALNESS));

    let custom = PaintDefaults {
        roughness: 0.8,
        metalness: 0.1,
    };
    let painted = Material::painted(any_texture(), &original, custom);
    assert_eq!(painted.roughness, Some(0.8));
    assert_eq!(painted.metalness, Some(0.1));
}

#[test]
fn binding_slot_access() {
    let single = MaterialBinding::Single(Material::new(None, MaterialKind::Standard));
    assert_eq!(single.slot_count(), 1);
    assert!(single.slot(0).is_some());
    assert!(single.slot(1).is_none());

    let list = MaterialBinding::List(smallvec::smallvec![
        Material::new(Some("a".to_owned()), MaterialKind::Standard),
        Material::new(Some("b".to_owned()), MaterialKind::Phong),
    ]);
    assert_eq!(list.slot_count(), 2);
    assert_eq!(list.slot(1).unwrap().name.as_deref(), Some("b"));
}

#[test]
fn scene_clone_is_deep() {
    let scene = GarmentScene {
        name: Some("vest".to_owned()),
        meshes: vec![MeshNode {
            name: "body".to_owned(),
            binding: MaterialBinding::Single(Material::new(
                Some("Fabric_01".to_owned()),
                MaterialKind::Standard,
            )),
        }],
    };

    let mut copy = scene.clone();
    copy.meshes[0].name = "changed".to_owned();
    if let MaterialBinding::Single(mat) = &mut copy.meshes[0].binding {
        mat.name = None;
        mat.texture = Some(any_texture());
    }

    assert_eq!(scene.meshes[0].name, "body");
    if let MaterialBinding::Single(mat) = &scene.meshes[0].binding {
        assert_eq!(mat.name.as_deref(), Some("Fabric_01"));
        assert!(mat.texture.is_none());
    } else {
        panic!("expected single binding");
    }
}
