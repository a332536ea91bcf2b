//! Playback session - what is playing now and what plays next
//!
//! Owns the current track, the play flag and the up-next queue. Every
//! operation is infallible: requests that make no sense in the current state
//! are ignored.
//!
//! ```text
//!            select_track
//!   Idle ──────────────────▶ Playing ◀──── advance (from either)
//!                             │   ▲
//!                       pause │   │ resume
//!                             ▼   │
//!                            Paused
//! ```

use crate::queue::Queue;
use crate::types::SessionState;
use mood_core::{Catalog, Track};
use std::sync::Arc;

/// Single source of truth for playback state
///
/// Invariants:
/// - the queue never contains the current track
/// - with no current track, the session is not playing and the queue is empty
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    catalog: Arc<Catalog>,
    current: Option<Track>,
    is_playing: bool,
    queue: Queue,
}

impl PlaybackSession {
    /// Create an idle session over a catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current: None,
            is_playing: false,
            queue: Queue::new(),
        }
    }

    // ===== Playback Control =====

    /// Make `track` current and start playing it
    ///
    /// The queue is rebuilt from the first playlist containing the track.
    pub fn select_track(&mut self, track: Track) {
        tracing::debug!(track = %track.id, "Selecting track");
        self.is_playing = true;
        self.current = Some(track);
        self.on_current_changed();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Resume playback
    ///
    /// Ignored when no track has been selected.
    pub fn resume(&mut self) {
        if self.current.is_none() {
            tracing::debug!("Resume requested with no current track");
            return;
        }
        self.is_playing = true;
    }

    /// Move to the next queued track and play it
    ///
    /// Returns `false` (leaving everything untouched) when the queue is
    /// empty. There is no separate end-of-playlist state.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.queue.pop_next() else {
            tracing::debug!("Advance requested with empty queue");
            return false;
        };

        tracing::debug!(track = %next.id, remaining = self.queue.len(), "Advancing");
        self.current = Some(next);
        self.is_playing = true;
        true
    }

    /// Go back to the previous track
    ///
    /// Play history is not tracked, so this never does anything and always
    /// returns `false`.
    pub fn retreat(&mut self) -> bool {
        tracing::debug!("Previous track is not supported");
        false
    }

    /// Rebuild derived state after the current track was replaced
    fn on_current_changed(&mut self) {
        self.queue = match &self.current {
            Some(track) => Queue::derive(&self.catalog, &track.id),
            None => Queue::new(),
        };
    }

    // ===== State Queries =====

    /// Current state
    pub fn state(&self) -> SessionState {
        match (&self.current, self.is_playing) {
            (None, _) => SessionState::Idle,
            (Some(_), true) => SessionState::Playing,
            (Some(_), false) => SessionState::Paused,
        }
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Upcoming tracks in play order
    pub fn queue(&self) -> impl Iterator<Item = &Track> {
        self.queue.iter()
    }

    /// Number of upcoming tracks
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Next track without consuming it
    pub fn peek_next(&self) -> Option<&Track> {
        self.queue.peek_next()
    }

    /// Check if there is a next track
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Check if there is a previous track (never, see [`Self::retreat`])
    pub fn has_previous(&self) -> bool {
        false
    }

    /// Catalog the queue is derived from
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
