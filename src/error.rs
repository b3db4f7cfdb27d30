//! Error types for QR Studio operations

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for QR Studio operations
///
/// Every variant is recoverable: each one surfaces as a modal dialog and
/// the window stays interactive afterwards.
#[derive(Error, Debug)]
pub enum Error {
    /// The selected file could not be decoded, or the output raster could
    /// not be written
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// QR symbol construction failed
    #[error("QR encode error: {0}")]
    QrEncode(String),
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}
