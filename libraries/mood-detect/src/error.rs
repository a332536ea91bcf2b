//! Error types for image capture

use thiserror::Error;

/// Why a still image could not be captured
///
/// Capture errors never reach the user: the detector logs them and falls
/// back to classifying without an image.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No camera available")]
    Unavailable,

    #[error("Camera returned an empty frame")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
