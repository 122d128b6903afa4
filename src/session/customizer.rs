//! The customizer session that turns state changes into rebound scenes.
use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::assets::ingest::{DecodedLogo, IngestError, ingest_logo};
use crate::assets::store::SceneCache;
use crate::effects::fabric::FabricNoise;
use crate::foundation::core::{GarmentAssetId, LogoScale, Placement, Rgb8};
use crate::foundation::error::{WeftlyError, WeftlyResult};
use crate::scene::model::{GarmentScene, PaintDefaults};
use crate::scene::rebind::rebind_with_defaults;
use crate::texture::synth::{SynthesizedTexture, synthesize_texture};

const FINGERPRINT_SEED: u64 = 0x77ef_71_5eed;

/// Name reported by [`CustomizerSession::summary`] when no preset is active.
pub const CUSTOM_TEMPLATE_NAME: &str = "Custom";

/// A named preset of logo position and size.
///
/// Values are raw control numbers; they pass through the same clamping as
/// manual slider input when applied.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacementTemplate {
    /// Preset name shown in the UI.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Horizontal placement.
    pub x: f64,
    /// Vertical placement.
    pub y: f64,
    /// Logo scale.
    pub scale: f64,
}

const TEMPLATES: [PlacementTemplate; 6] = [
    PlacementTemplate {
        name: "Chest Left",
        description: "Small mark over the left chest",
        x: -0.35,
        y: 0.35,
        scale: 0.25,
    },
    PlacementTemplate {
        name: "Chest Center",
        description: "Centered across the chest",
        x: 0.0,
        y: 0.3,
        scale: 0.4,
    },
    PlacementTemplate {
        name: "Back Center",
        description: "Large print across the upper back",
        x: 0.0,
        y: 0.0,
        scale: 0.6,
    },
    PlacementTemplate {
        name: "Back Lower",
        description: "Wide print above the hem",
        x: 0.0,
        y: -0.45,
        scale: 0.5,
    },
    PlacementTemplate {
        name: "Sleeve",
        description: "Slim badge on the upper sleeve",
        x: 0.6,
        y: 0.15,
        scale: 0.18,
    },
    PlacementTemplate {
        name: "Hem Tag",
        description: "Discreet tag near the lower hem",
        x: -0.55,
        y: -0.6,
        scale: 0.15,
    },
];

/// The six fixed placement presets, in display order.
pub fn templates() -> &'static [PlacementTemplate] {
    &TEMPLATES
}

/// Look up a preset by name.
pub fn template_by_name(name: &str) -> Option<&'static PlacementTemplate> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// The fixed brand palette offered by the color picker.
pub const PALETTE: [(&str, Rgb8); 6] = [
    ("Gold", Rgb8::new(0xff, 0xd7, 0x00)),
    ("Silver", Rgb8::new(0xc0, 0xc0, 0xc0)),
    ("Black", Rgb8::new(0x00, 0x00, 0x00)),
    ("Red", Rgb8::new(0xff, 0x00, 0x00)),
    ("Blue", Rgb8::new(0x00, 0x00, 0xff)),
    ("Green", Rgb8::new(0x00, 0xff, 0x00)),
];

/// Fabric finish preset, mapped to the surface parameters used for painted
/// slots whose original material declared none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishPreset {
    /// Plain weave.
    #[default]
    Solid,
    /// Woven stripe finish, rougher and duller.
    Stripes,
    /// Dotted satin finish, smoother and more reflective.
    Dots,
}

impl FinishPreset {
    /// Roughness/metalness pair for this finish.
    pub fn surface(self) -> PaintDefaults {
        match self {
            Self::Solid => PaintDefaults {
                roughness: 0.5,
                metalness: 0.2,
            },
            Self::Stripes => PaintDefaults {
                roughness: 0.8,
                metalness: 0.1,
            },
            Self::Dots => PaintDefaults {
                roughness: 0.3,
                metalness: 0.7,
            },
        }
    }
}

/// Human-readable summary of the active template, for the UI side panel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TemplateSummary {
    /// Active preset name, or [`CUSTOM_TEMPLATE_NAME`].
    pub name: String,
    /// Preset description.
    pub description: String,
    /// Logo size as a rounded percentage of the reference span.
    pub size_percent: u32,
    /// Coarse position label, e.g. "Upper Left".
    pub position: String,
}

/// Threshold beyond which a placement axis leaves the "center" band.
const POSITION_LABEL_THRESHOLD: f64 = 0.25;

/// Coarse {Upper, Middle, Lower} x {Left, Center, Right} label for a
/// placement.
pub fn position_label(placement: Placement) -> String {
    let vertical = if placement.y > POSITION_LABEL_THRESHOLD {
        "Upper"
    } else if placement.y < -POSITION_LABEL_THRESHOLD {
        "Lower"
    } else {
        "Middle"
    };
    let horizontal = if placement.x < -POSITION_LABEL_THRESHOLD {
        "Left"
    } else if placement.x > POSITION_LABEL_THRESHOLD {
        "Right"
    } else {
        "Center"
    };
    format!("{vertical} {horizontal}")
}

/// Everything the user has chosen so far.
///
/// The uploaded logo is not serialized; hosts persisting a design keep the
/// upload alongside and re-ingest it on restore.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CustomizationState {
    /// Garment base color.
    pub base_color: Rgb8,
    /// Accepted logo, if one has been uploaded.
    #[serde(skip)]
    pub logo: Option<DecodedLogo>,
    /// Normalized logo anchor.
    pub placement: Placement,
    /// Normalized logo size.
    pub scale: LogoScale,
    /// Which base model to render.
    pub garment: GarmentAssetId,
    /// Active preset name; `None` means free controls.
    pub template: Option<String>,
    /// Fabric finish preset; `None` keeps the standard paint defaults.
    pub finish: Option<FinishPreset>,
}

impl CustomizationState {
    /// Fresh state for a garment: gold base, centered chest placement,
    /// no logo.
    pub fn new(garment: GarmentAssetId) -> Self {
        Self {
            base_color: PALETTE[0].1,
            logo: None,
            placement: Placement::clamped(0.0, 0.3),
            scale: LogoScale::clamped(0.4),
            garment,
            template: None,
            finish: None,
        }
    }
}

/// Receipt for an in-flight logo decode.
///
/// Created by [`CustomizerSession::begin_logo_upload`]; the decode result is
/// only applied if no newer upload or removal superseded the ticket in the
/// meantime.
#[derive(Clone, Copy, Debug)]
#[must_use = "pass the ticket to complete_logo_upload"]
pub struct LogoTicket {
    generation: u64,
}

/// What happened to a completed logo decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoUpload {
    /// The decoded logo is now part of the state.
    Applied,
    /// The ticket was superseded; the result was discarded.
    Stale,
}

/// Whether a refresh produced a new scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// A new texture was synthesized and rebound.
    Updated,
    /// The state fingerprint was unchanged; the current scene stands.
    Unchanged,
}

#[derive(Debug)]
struct ReboundView {
    fingerprint: u128,
    texture: Arc<SynthesizedTexture>,
    scene: GarmentScene,
}

/// Single-threaded, event-driven driver of the customization pipeline.
///
/// Hosts mutate the state through the setters and call
/// [`refresh`](Self::refresh) on each change notification. Every refresh is
/// atomic from the host's perspective: the full texture is built before the
/// scene is touched, and the displayed scene reference is swapped only after
/// the new clone is fully rebound, so a rapid burst of changes can never
/// surface a mixed intermediate. If a refresh fails, the previous rebound
/// scene stays in place.
#[derive(Debug)]
pub struct CustomizerSession {
    cache: SceneCache,
    state: CustomizationState,
    noise: FabricNoise,
    logo_generation: u64,
    view: Option<ReboundView>,
}

impl CustomizerSession {
    /// Create a session over a scene cache and an initial state.
    pub fn new(cache: SceneCache, state: CustomizationState) -> Self {
        Self {
            cache,
            state,
            noise: FabricNoise::default(),
            logo_generation: 0,
            view: None,
        }
    }

    /// Pin the fabric grain to a seed (reproducible output).
    pub fn with_noise(mut self, noise: FabricNoise) -> Self {
        self.noise = noise;
        self
    }

    /// The current customization state.
    pub fn state(&self) -> &CustomizationState {
        &self.state
    }

    /// The scene cache.
    pub fn cache(&self) -> &SceneCache {
        &self.cache
    }

    /// The scene cache, mutable (for loading further garments).
    pub fn cache_mut(&mut self) -> &mut SceneCache {
        &mut self.cache
    }

    /// Set the garment base color.
    pub fn set_base_color(&mut self, color: Rgb8) {
        self.state.base_color = color;
    }

    /// Move the logo anchor; input is clamped into the valid range and the
    /// session drops back to free controls.
    pub fn set_placement(&mut self, x: f64, y: f64) {
        self.state.placement = Placement::clamped(x, y);
        self.state.template = None;
    }

    /// Resize the logo; input is clamped into the valid range and the
    /// session drops back to free controls.
    pub fn set_scale(&mut self, scale: f64) {
        self.state.scale = LogoScale::clamped(scale);
        self.state.template = None;
    }

    /// Apply a placement preset.
    pub fn apply_template(&mut self, template: &PlacementTemplate) {
        self.state.placement = Placement::clamped(template.x, template.y);
        self.state.scale = LogoScale::clamped(template.scale);
        self.state.template = Some(template.name.to_owned());
    }

    /// Select the fabric finish preset.
    pub fn set_finish(&mut self, finish: Option<FinishPreset>) {
        self.state.finish = finish;
    }

    /// Switch to a different garment model.
    pub fn select_garment(&mut self, garment: GarmentAssetId) {
        self.state.garment = garment;
    }

    /// Remove the current logo. A still-pending upload is superseded and its
    /// eventual result will be discarded.
    pub fn clear_logo(&mut self) {
        self.logo_generation += 1;
        self.state.logo = None;
    }

    /// Start a logo upload and get its supersede ticket.
    ///
    /// Decoding may then happen wherever the host likes (typically off the
    /// UI thread); hand the outcome back through
    /// [`complete_logo_upload`](Self::complete_logo_upload). Beginning a new
    /// upload supersedes any ticket still in flight.
    pub fn begin_logo_upload(&mut self) -> LogoTicket {
        self.logo_generation += 1;
        LogoTicket {
            generation: self.logo_generation,
        }
    }

    /// Apply the outcome of a logo decode.
    ///
    /// A stale ticket (superseded by [`clear_logo`](Self::clear_logo) or a
    /// newer upload) is discarded without touching the state, even on
    /// success. An ingestion error propagates to the UI but leaves the
    /// previously accepted logo in place.
    pub fn complete_logo_upload(
        &mut self,
        ticket: LogoTicket,
        result: Result<DecodedLogo, IngestError>,
    ) -> Result<LogoUpload, IngestError> {
        if ticket.generation != self.logo_generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.logo_generation,
                "discarding superseded logo decode"
            );
            return Ok(LogoUpload::Stale);
        }
        let logo = result?;
        self.state.logo = Some(logo);
        Ok(LogoUpload::Applied)
    }

    /// Ingest and apply a logo in one synchronous step.
    pub fn upload_logo(&mut self, bytes: Vec<u8>, mime: &str) -> Result<LogoUpload, IngestError> {
        let ticket = self.begin_logo_upload();
        let result = ingest_logo(bytes, mime);
        self.complete_logo_upload(ticket, result)
    }

    /// Summary of the active template for the UI side panel.
    pub fn summary(&self) -> TemplateSummary {
        let (name, description) = match self
            .state
            .template
            .as_deref()
            .and_then(template_by_name)
        {
            Some(t) => (t.name, t.description),
            None => (CUSTOM_TEMPLATE_NAME, "Free positioning with manual controls"),
        };
        TemplateSummary {
            name: name.to_owned(),
            description: description.to_owned(),
            size_percent: (self.state.scale.value() * 100.0).round() as u32,
            position: position_label(self.state.placement),
        }
    }

    /// Run one synthesize + rebind cycle if the state changed since the last
    /// one.
    ///
    /// Fails only when the selected garment is not in the cache; the
    /// previous view survives any failure.
    #[tracing::instrument(skip(self), fields(garment = %self.state.garment))]
    pub fn refresh(&mut self) -> WeftlyResult<Refresh> {
        let fingerprint = self.fingerprint();
        if self
            .view
            .as_ref()
            .is_some_and(|v| v.fingerprint == fingerprint)
        {
            return Ok(Refresh::Unchanged);
        }

        let base = self.cache.get(&self.state.garment).ok_or_else(|| {
            WeftlyError::asset(format!("garment \"{}\" is not loaded", self.state.garment))
        })?;

        let texture = Arc::new(synthesize_texture(
            self.state.base_color,
            self.state.logo.as_ref(),
            self.state.placement,
            self.state.scale,
            self.noise,
        ));
        let defaults = self
            .state
            .finish
            .map_or_else(PaintDefaults::default, FinishPreset::surface);
        let scene = rebind_with_defaults(base, &texture, defaults);

        // Swap only now that the clone is fully rebound; the old view (and
        // its texture) drop here, transferring display ownership to the new
        // one.
        self.view = Some(ReboundView {
            fingerprint,
            texture,
            scene,
        });
        Ok(Refresh::Updated)
    }

    /// The most recently rebound scene, if any refresh has completed.
    pub fn scene(&self) -> Option<&GarmentScene> {
        self.view.as_ref().map(|v| &v.scene)
    }

    /// The texture bound by the most recent refresh.
    pub fn texture(&self) -> Option<&Arc<SynthesizedTexture>> {
        self.view.as_ref().map(|v| &v.texture)
    }

    fn fingerprint(&self) -> u128 {
        let mut h = Xxh3::with_seed(FINGERPRINT_SEED);
        h.update(&[self.state.base_color.r, self.state.base_color.g, self.state.base_color.b]);
        match &self.state.logo {
            Some(logo) => {
                h.update(&[1]);
                h.update(&logo.content_hash.to_le_bytes());
            }
            None => h.update(&[0]),
        }
        h.update(&self.state.placement.x.to_bits().to_le_bytes());
        h.update(&self.state.placement.y.to_bits().to_le_bytes());
        h.update(&self.state.scale.value().to_bits().to_le_bytes());
        h.update(self.state.garment.0.as_bytes());
        h.update(&[match self.state.finish {
            None => 0,
            Some(FinishPreset::Solid) => 1,
            Some(FinishPreset::Stripes) => 2,
            Some(FinishPreset::Dots) => 3,
        }]);
        if let FabricNoise::Seeded(seed) = self.noise {
            h.update(&seed.to_le_bytes());
        }
        h.digest128()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/customizer.rs"]
mod tests;
