/// Player application error types
use mood_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlayerAppError>;

#[derive(Debug, Error)]
pub enum PlayerAppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CoreError),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),
}

impl From<mood_playback::PlaybackError> for PlayerAppError {
    fn from(err: mood_playback::PlaybackError) -> Self {
        match err {
            mood_playback::PlaybackError::UnknownTrack(id) => Self::UnknownTrack(id.to_string()),
            mood_playback::PlaybackError::InvalidConfig(msg) => Self::Config(msg),
        }
    }
}
