use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;

use crate::assets::color::adjust_brightness;
use crate::foundation::core::{PixelBuffer, Rgb8};

/// Maximum per-channel grain perturbation, in channel units.
pub const GRAIN_AMPLITUDE: i32 = 10;

const GRADIENT_START_LIFT: f64 = 0.2;
const GRADIENT_END_LIFT: f64 = 0.1;

/// Grain randomness policy for fabric synthesis.
///
/// `Entropy` reseeds on every call: two runs with identical inputs are
/// visually alike but not byte-identical, which is the intended weave look.
/// `Seeded` pins the grain for reproducible output (caching, golden tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FabricNoise {
    /// Fresh grain per call.
    Entropy,
    /// Deterministic grain derived from the given seed.
    Seeded(u64),
}

impl Default for FabricNoise {
    fn default() -> Self {
        Self::Entropy
    }
}

impl FabricNoise {
    fn base_seed(self) -> u64 {
        match self {
            Self::Entropy => rand::random::<u64>(),
            Self::Seeded(seed) => seed,
        }
    }
}

/// Color of the diagonal base gradient at pixel `(x, y)`, before grain.
///
/// Three stops across the diagonal: the base color lifted by +0.2 at the
/// start, the base color at the midpoint, lifted by +0.1 at the end.
pub(crate) fn gradient_color(base: Rgb8, x: u32, y: u32, width: u32, height: u32) -> Rgb8 {
    let span = (width + height).saturating_sub(2);
    let t = if span == 0 {
        0.0
    } else {
        f64::from(x + y) / f64::from(span)
    };

    let start = adjust_brightness(base, GRADIENT_START_LIFT);
    let end = adjust_brightness(base, GRADIENT_END_LIFT);
    if t <= 0.5 {
        start.lerp(base, t / 0.5)
    } else {
        base.lerp(end, (t - 0.5) / 0.5)
    }
}

/// Fill `buf` with the procedural fabric: diagonal brightness gradient plus
/// per-pixel uniform grain in `[-GRAIN_AMPLITUDE, +GRAIN_AMPLITUDE]` on each
/// color channel. Alpha stays opaque.
///
/// Rows are filled in parallel; each row derives its own PCG stream from the
/// call seed, so seeded output does not depend on thread scheduling.
pub(crate) fn render_fabric(buf: &mut PixelBuffer, base: Rgb8, noise: FabricNoise) {
    let width = buf.width();
    let height = buf.height();
    if width == 0 || height == 0 {
        return;
    }

    let seed = noise.base_seed();
    let row_len = (width as usize) * 4;

    buf.as_bytes_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(row, bytes)| {
            let y = row as u32;
            let mut rng = Pcg32::seed_from_u64(
                seed ^ (u64::from(y).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            );
            for (x, px) in bytes.chunks_exact_mut(4).enumerate() {
                let c = gradient_color(base, x as u32, y, width, height);
                px[0] = grain(&mut rng, c.r);
                px[1] = grain(&mut rng, c.g);
                px[2] = grain(&mut rng, c.b);
                px[3] = 255;
            }
        });
}

fn grain(rng: &mut Pcg32, channel: u8) -> u8 {
    let delta = rng.random_range(-GRAIN_AMPLITUDE..=GRAIN_AMPLITUDE);
    (i32::from(channel) + delta).clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fabric.rs"]
mod tests;
