//! Codec-specific error types

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec-specific error types
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No QR code found in image")]
    NoSymbolFound,

    #[error("Failed to decode QR code: {0}")]
    Decode(String),

    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Invalid encoding options: {0}")]
    InvalidOptions(String),
}
