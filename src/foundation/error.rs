use crate::assets::ingest::IngestError;

/// Crate-wide result alias.
pub type WeftlyResult<T> = Result<T, WeftlyError>;

/// Crate-level error type.
///
/// Logo ingestion failures keep their own taxonomy ([`IngestError`]) because
/// they are surfaced verbatim to end users; everything else is an internal
/// defect or a host-integration mistake.
#[derive(thiserror::Error, Debug)]
pub enum WeftlyError {
    /// A value handed to the core violates its declared range or format.
    #[error("validation error: {0}")]
    Validation(String),

    /// A garment asset could not be resolved from the scene cache.
    #[error("asset error: {0}")]
    Asset(String),

    /// A logo upload was rejected by the ingestion pipeline.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Any other failure, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WeftlyError {
    /// Build a [`WeftlyError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WeftlyError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}
