//! Recogniser-specific error types

/// Result type for recogniser extraction steps
pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// A payload matched a recogniser but failed a format-specific parse step
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecognitionError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("Invalid GEO format: {0}")]
    InvalidGeo(String),
}
