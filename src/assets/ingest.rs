//! Logo upload ingestion: decoding, validation, and content hashing.
use std::sync::Arc;

use xxhash_rust::xxh3::xxh3_64;

/// Byte-size ceiling for an uploaded logo file.
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// Smallest accepted logo edge, in pixels.
pub const MIN_LOGO_DIM: u32 = 50;

/// Largest accepted logo edge, in pixels.
pub const MAX_LOGO_DIM: u32 = 2048;

const ACCEPTED_MIME: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Why an uploaded logo was rejected.
///
/// Every variant's `Display` text is written for end users; hosts surface it
/// verbatim next to the file picker. A rejection aborts that upload only —
/// a previously accepted logo stays in effect.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    /// Declared MIME type is not in the accepted set.
    #[error("unsupported logo format \"{0}\" — use a JPEG, PNG, GIF, or WebP image")]
    UnsupportedFormat(String),

    /// File bytes or decoded dimensions exceed the accepted maximum.
    #[error("logo is too large: {0}")]
    TooLarge(String),

    /// Decoded dimensions fall below the accepted minimum.
    #[error("logo must be at least {MIN_LOGO_DIM}x{MIN_LOGO_DIM} pixels, got {width}x{height}")]
    TooSmall {
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },

    /// The bytes could not be decoded as an image.
    #[error("could not read the logo image: {0}")]
    DecodeFailed(String),
}

/// A validated, decoded logo ready for compositing.
///
/// Pixel data is straight-alpha RGBA8. The original encoded bytes are kept so
/// the UI can render a preview thumbnail without re-encoding.
#[derive(Clone, Debug)]
pub struct DecodedLogo {
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 pixels, row-major.
    pub rgba8: Arc<Vec<u8>>,
    /// The upload's original encoded bytes, for preview rendering.
    pub encoded: Arc<Vec<u8>>,
    /// Normalized declared MIME type of the upload.
    pub mime: String,
    /// xxh3 digest of the encoded bytes; identifies the upload cheaply.
    pub content_hash: u64,
}

impl DecodedLogo {
    /// Source aspect ratio (`height / width`).
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    pub(crate) fn sample(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.rgba8[i],
            self.rgba8[i + 1],
            self.rgba8[i + 2],
            self.rgba8[i + 3],
        ]
    }
}

/// Validate and decode an uploaded logo.
///
/// Checks run in a fixed fail-fast order, first violation wins:
/// declared MIME type, byte size, decodability, minimum dimensions,
/// maximum dimensions. This is the only validation gate in the core;
/// placement and scale clamping happen at the state-update boundary.
#[tracing::instrument(skip(bytes), fields(len = bytes.len(), mime = declared_mime))]
pub fn ingest_logo(bytes: Vec<u8>, declared_mime: &str) -> Result<DecodedLogo, IngestError> {
    let mime = declared_mime.trim().to_ascii_lowercase();
    if !ACCEPTED_MIME.contains(&mime.as_str()) {
        return Err(IngestError::UnsupportedFormat(declared_mime.to_owned()));
    }

    if bytes.len() > MAX_LOGO_BYTES {
        return Err(IngestError::TooLarge(format!(
            "{} bytes exceeds the {} MiB limit",
            bytes.len(),
            MAX_LOGO_BYTES / (1024 * 1024)
        )));
    }

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IngestError::DecodeFailed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width < MIN_LOGO_DIM || height < MIN_LOGO_DIM {
        return Err(IngestError::TooSmall { width, height });
    }
    if width > MAX_LOGO_DIM || height > MAX_LOGO_DIM {
        return Err(IngestError::TooLarge(format!(
            "{width}x{height} pixels exceeds the {MAX_LOGO_DIM}x{MAX_LOGO_DIM} limit"
        )));
    }

    let content_hash = xxh3_64(&bytes);
    tracing::debug!(width, height, content_hash, "logo accepted");

    Ok(DecodedLogo {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
        encoded: Arc::new(bytes),
        mime,
        content_hash,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ingest.rs"]
mod tests;
