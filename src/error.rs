//! Error types for mail-origins.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Geo error: {0}")]
    Geo(#[from] GeoError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Mail-retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source {name} failed to start delivery: {reason}")]
    FetchFailed { name: String, reason: String },

    #[error("Message stream aborted: {0}")]
    StreamAborted(String),

    #[error("Failed to decode message record: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Geolocation collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Failed to parse geo table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pipeline-related errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Message collection failed: {0}")]
    Collect(#[from] SourceError),

    #[error("Failed to serialize bubble payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
