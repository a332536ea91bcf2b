/// Core error types for MoodTune
use crate::types::{PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type
///
/// Only catalog construction and label parsing can fail. Filtering and
/// queue derivation never do.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Label is not one of the known moods
    #[error("Unknown mood label: {0:?}")]
    UnknownMood(String),

    /// Two playlists share an id
    #[error("Duplicate playlist id: {0}")]
    DuplicatePlaylist(PlaylistId),

    /// A playlist lists the same track twice
    #[error("Duplicate track {track} in playlist {playlist}")]
    DuplicateTrack { playlist: PlaylistId, track: TrackId },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catalog parse errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
