//! Core types for playback management

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// Session state
///
/// There is no transition back to `Idle` once a track has been selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No track selected yet
    Idle,

    /// Track selected, playback paused
    Paused,

    /// Track selected and playing
    Playing,
}

/// Configuration for the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.8)
    pub initial_volume: f32,

    /// Start muted (default: false)
    pub start_muted: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.8,
            start_muted: false,
        }
    }
}

impl PlayerConfig {
    /// Reject values the transport cannot take
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "initial_volume must be between 0.0 and 1.0, got {}",
                self.initial_volume
            )));
        }
        Ok(())
    }
}
