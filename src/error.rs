//! Error types for storytext.
//!
//! The pipeline itself is total and never errors; these variants cover the
//! boundary with the analysis service (payload construction and
//! serialization).

/// Error type for payload operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL for an analysis payload failed to parse.
    #[error("invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Payload serialization failed.
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for payload operations.
pub type Result<T> = std::result::Result<T, Error>;
