//! Error types for playback management

use mood_core::TrackId;
use thiserror::Error;

/// Playback errors
///
/// Session operations never fail; these only surface at the edges where the
/// presentation layer hands in ids or configuration.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track id is not in the catalog
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
