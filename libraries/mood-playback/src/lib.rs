//! MoodTune - Playback Management
//!
//! Platform-agnostic playback and queue management for MoodTune.
//!
//! This crate provides:
//! - Playback session (current track, play flag, up-next queue)
//! - Queue derivation from catalog order
//! - Volume control (linear 0.0-1.0, mute/unmute)
//! - Transport adapter boundary for the external streaming widget
//! - Event buffer for UI synchronization
//!
//! # Architecture
//!
//! `mood-playback` never streams audio itself. The external player is
//! reached through [`TransportAdapter`]; it receives load/play/volume/seek
//! commands and reports progress back through [`PlayerController`] callbacks.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use mood_core::{Catalog, TrackId};
//! use mood_playback::{PlayerConfig, PlayerController, SessionState};
//! use std::sync::Arc;
//!
//! let mut player = PlayerController::new(Arc::new(Catalog::builtin()), PlayerConfig::default());
//!
//! // Selecting a track queues the rest of its playlist
//! player.select_track(&TrackId::new("happy-3")).unwrap();
//! assert_eq!(player.queue_len(), 2);
//!
//! // The transport reports the end of the track
//! player.on_track_ended();
//! assert_eq!(player.current_track().unwrap().id, TrackId::new("happy-4"));
//!
//! player.pause();
//! assert_eq!(player.state(), SessionState::Paused);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use mood_core::Track;
//! use mood_playback::{PlayerController, TransportAdapter};
//!
//! // Implement TransportAdapter for your streaming widget
//! struct EmbeddedPlayer;
//!
//! impl TransportAdapter for EmbeddedPlayer {
//!     fn load(&mut self, track: &Track) {
//!         // Point the widget at track.stream_url
//!     }
//!
//!     fn set_playing(&mut self, playing: bool) {}
//!
//!     fn set_volume(&mut self, level: f32) {}
//!
//!     fn seek(&mut self, fraction: f64) {}
//! }
//!
//! let mut player = PlayerController::default();
//! player.set_transport(Box::new(EmbeddedPlayer));
//! ```

mod controller;
mod error;
mod events;
mod queue;
mod session;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use controller::PlayerController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use queue::{derive_queue, Queue};
pub use session::PlaybackSession;
pub use transport::{format_time, Telemetry, TransportAdapter};
pub use types::{PlayerConfig, SessionState};
pub use volume::Volume;
