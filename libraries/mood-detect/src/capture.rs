//! Image capture adapters
//!
//! A capture is a single attempt at grabbing one still frame. There is no
//! retry: a failed attempt goes straight to the classifier's fallback path.

use crate::error::{CaptureError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Still image encoding handed to a classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// JPEG still, the format webcams hand out by default
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Source of still images (webcam, file, test fixture)
#[async_trait]
pub trait ImageCapture: Send + Sync {
    /// Grab one frame
    async fn capture(&self) -> Result<CapturedImage>;
}

/// Capture for headless environments: always fails with
/// [`CaptureError::Unavailable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCamera;

#[async_trait]
impl ImageCapture for NoCamera {
    async fn capture(&self) -> Result<CapturedImage> {
        Err(CaptureError::Unavailable)
    }
}

/// Reads a still image from disk
#[derive(Debug, Clone)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ImageCapture for FileCapture {
    async fn capture(&self) -> Result<CapturedImage> {
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.is_empty() {
            return Err(CaptureError::Empty);
        }

        tracing::debug!(path = %self.path.display(), size = bytes.len(), "Captured image from file");
        Ok(CapturedImage::new(bytes, mime_for(&self.path)))
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}
