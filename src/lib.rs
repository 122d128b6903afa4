//! Weftly is a garment-customization engine: it synthesizes fabric textures
//! on the fly and rebinds them onto a 3D garment model.
//!
//! The pipeline is driven by a [`CustomizationState`] — base color, optional
//! uploaded logo, normalized placement and size — and produces, per state
//! change, one immutable [`SynthesizedTexture`] bound onto a fresh deep clone
//! of the cached base scene:
//!
//! - Validate uploads through [`ingest_logo`]
//! - Hold state in a [`CustomizerSession`] and call
//!   [`refresh`](CustomizerSession::refresh) on every change
//! - Hand the rebound [`GarmentScene`] to the renderer
//!
//! Rendering, camera, lighting, and model-file loading are the host's
//! responsibility; the engine only consumes a loaded scene graph through the
//! [`SceneCache`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod effects;

pub mod assets;
pub mod scene;
pub mod session;
pub mod texture;

pub use crate::foundation::core::{
    GarmentAssetId, LogoScale, PLACEMENT_RANGE, PixelBuffer, Placement, Rgb8,
};
pub use crate::foundation::error::{WeftlyError, WeftlyResult};

pub use crate::assets::color::adjust_brightness;
pub use crate::assets::ingest::{DecodedLogo, IngestError, ingest_logo};
pub use crate::assets::store::SceneCache;
pub use crate::effects::fabric::FabricNoise;
pub use crate::scene::model::{
    GarmentScene, Material, MaterialBinding, MaterialKind, MeshNode, PaintDefaults,
};
pub use crate::scene::rebind::{
    MaterialDescriptor, PaintRule, is_paint_target, paint_target_rule, rebind_garment_materials,
    rebind_with_defaults,
};
pub use crate::session::customizer::{
    CUSTOM_TEMPLATE_NAME, CustomizationState, CustomizerSession, FinishPreset, LogoTicket,
    LogoUpload, PALETTE, PlacementTemplate, Refresh, TemplateSummary, position_label,
    template_by_name, templates,
};
pub use crate::texture::synth::{SynthesizedTexture, TEXTURE_SIDE, WrapMode, synthesize_texture};
