use serde::Deserialize;

use crate::foundation::error::{WeftlyError, WeftlyResult};

pub use kurbo::{Point, Rect};

/// Largest normalized logo offset from the garment center, per axis.
///
/// Placement coordinates live in `[-PLACEMENT_RANGE, +PLACEMENT_RANGE]`; the
/// texture mapping in the compositor assumes exactly this range.
pub const PLACEMENT_RANGE: f64 = 0.8;

/// An opaque 8-bit sRGB color, canonically written as a 6-digit hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from raw channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> WeftlyResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return Err(WeftlyError::validation(format!(
                "color must be a 6-digit hex string, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> WeftlyResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| WeftlyError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation toward `other`, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
        }
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Normalized logo anchor on the garment surface.
///
/// Both axes are bounded by [`PLACEMENT_RANGE`]; `y` points up (the
/// compositor inverts it when mapping to pixel rows).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Horizontal offset, negative is left.
    pub x: f64,
    /// Vertical offset, negative is down.
    pub y: f64,
}

impl Placement {
    /// Create a validated placement; both axes must be finite and in range.
    pub fn new(x: f64, y: f64) -> WeftlyResult<Self> {
        for (axis, v) in [("x", x), ("y", y)] {
            if !v.is_finite() || v.abs() > PLACEMENT_RANGE {
                return Err(WeftlyError::validation(format!(
                    "placement {axis} must be within [-{PLACEMENT_RANGE}, {PLACEMENT_RANGE}], got {v}"
                )));
            }
        }
        Ok(Self { x, y })
    }

    /// Saturate arbitrary control input into the valid range.
    ///
    /// Non-finite input collapses to the center.
    pub fn clamped(x: f64, y: f64) -> Self {
        let sat = |v: f64| {
            if v.is_finite() {
                v.clamp(-PLACEMENT_RANGE, PLACEMENT_RANGE)
            } else {
                0.0
            }
        };
        Self {
            x: sat(x),
            y: sat(y),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Placement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        let (x, y) = match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => (x, y),
            Repr::Obj { x, y } => (x, y),
        };
        Placement::new(x, y).map_err(serde::de::Error::custom)
    }
}

/// Normalized logo size, a fraction of the reference garment-surface span.
///
/// Valid values are in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct LogoScale(f64);

impl LogoScale {
    /// Smallest accepted scale; `clamped` saturates up to this.
    pub const MIN: f64 = 0.01;

    /// Create a validated scale in `(0, 1]`.
    pub fn new(value: f64) -> WeftlyResult<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(WeftlyError::validation(format!(
                "logo scale must be in (0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Saturate arbitrary control input into `[MIN, 1]`.
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, 1.0))
        } else {
            Self(Self::MIN)
        }
    }

    /// The scale as a plain fraction.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for LogoScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        LogoScale::new(v).map_err(serde::de::Error::custom)
    }
}

/// Identifier selecting which base 3D garment model to load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GarmentAssetId(pub String);

impl GarmentAssetId {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for GarmentAssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned straight-alpha RGBA8 pixel buffer, row-major.
///
/// The synthesis pipeline threads one buffer by exclusive reference through
/// its stages; it is never aliased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        let mut data = vec![0u8; len * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw RGBA8 bytes, mutable.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn idx(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Read one pixel; `x`/`y` must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write one pixel; `x`/`y` must be in bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
