//! Player Events
//!
//! Event-based communication for UI synchronization. The controller queues
//! events as state changes and the presentation layer drains them.

use crate::types::SessionState;
use mood_core::{Mood, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Session state changed (idle, playing, paused)
    StateChanged {
        /// The new state
        state: SessionState,
    },

    /// Current track changed, by selection or by advancing
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Up-next queue changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Telemetry update from the transport
    PositionUpdate {
        /// Fraction played, 0.0-1.0
        progress: f64,
        /// Track duration, once known
        duration_secs: Option<f64>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Track played through to the end
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Active mood changed; visible playlists follow it
    MoodChanged {
        /// New mood, `None` when cleared
        mood: Option<Mood>,
    },
}
