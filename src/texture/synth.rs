//! Texture synthesis: compositing fabric, color, and logo into one bitmap.
use crate::assets::ingest::DecodedLogo;
use crate::effects::fabric::{FabricNoise, render_fabric};
use crate::effects::logo::composite_logo;
use crate::foundation::core::{LogoScale, PixelBuffer, Placement, Rgb8};
use crate::foundation::error::{WeftlyError, WeftlyResult};

/// Canonical side length of a synthesized texture, in pixels.
///
/// Power of two, as the mipmap chain requires.
pub const TEXTURE_SIDE: u32 = 1024;

/// Texture wrap mode on one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Tile the texture.
    #[default]
    Repeat,
    /// Clamp UVs to the edge texel.
    ClampToEdge,
}

/// An immutable square bitmap plus the sampling metadata the renderer needs
/// to bind it.
///
/// Produced fresh on every synthesis call and never mutated afterwards;
/// hosts may keep one alive only while the input state is unchanged.
#[derive(Clone, Debug)]
pub struct SynthesizedTexture {
    pixels: PixelBuffer,
    wrap_s: WrapMode,
    wrap_t: WrapMode,
    flip_y: bool,
    generate_mipmaps: bool,
}

impl SynthesizedTexture {
    /// Wrap a finished bitmap with the canonical sampling flags.
    ///
    /// The bitmap must be square with a power-of-two side.
    pub fn from_pixels(pixels: PixelBuffer) -> WeftlyResult<Self> {
        let (w, h) = (pixels.width(), pixels.height());
        if w != h || w == 0 || !w.is_power_of_two() {
            return Err(WeftlyError::validation(format!(
                "texture must be a power-of-two square, got {w}x{h}"
            )));
        }
        Ok(Self::wrap(pixels))
    }

    fn wrap(pixels: PixelBuffer) -> Self {
        Self {
            pixels,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            // The garment UVs were authored against an unflipped image origin.
            flip_y: false,
            generate_mipmaps: true,
        }
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    /// The bitmap.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Horizontal wrap mode.
    pub fn wrap_s(&self) -> WrapMode {
        self.wrap_s
    }

    /// Vertical wrap mode.
    pub fn wrap_t(&self) -> WrapMode {
        self.wrap_t
    }

    /// Whether the renderer should flip the V axis on upload.
    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// Whether the renderer should build a mipmap chain on upload.
    pub fn generate_mipmaps(&self) -> bool {
        self.generate_mipmaps
    }
}

/// Synthesize one garment texture from the current customization inputs.
///
/// Runs the fabric generator and, when a logo is present, the logo
/// compositor over a single exclusively-owned buffer, then freezes the
/// result. Safe to call on every input change; callers may debounce but the
/// function itself never caches.
#[tracing::instrument(skip(logo), fields(base = %base.to_hex(), has_logo = logo.is_some()))]
pub fn synthesize_texture(
    base: Rgb8,
    logo: Option<&DecodedLogo>,
    placement: Placement,
    scale: LogoScale,
    noise: FabricNoise,
) -> SynthesizedTexture {
    let mut buf = PixelBuffer::new(TEXTURE_SIDE, TEXTURE_SIDE);
    render_fabric(&mut buf, base, noise);
    if let Some(logo) = logo {
        composite_logo(&mut buf, logo, placement, scale);
    }
    SynthesizedTexture::wrap(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/texture/synth.rs"]
mod tests;
