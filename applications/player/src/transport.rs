/// Simulated streaming transport
///
/// Stands in for the embedded video widget: it accepts commands and keeps
/// what it was told so the CLI (and tests) can inspect it.
use mood_core::{Track, TrackId};
use mood_playback::TransportAdapter;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportState {
    /// Every track loaded, in order
    pub loaded: Vec<TrackId>,
    pub playing: bool,
    pub volume: f32,
    /// Last seek target (0.0-1.0)
    pub position: f64,
}

/// Transport that records commands into shared state
#[derive(Debug, Clone, Default)]
pub struct SimulatedTransport {
    state: Arc<Mutex<TransportState>>,
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything the transport has been told
    pub fn state(&self) -> TransportState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, TransportState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TransportAdapter for SimulatedTransport {
    fn load(&mut self, track: &Track) {
        tracing::debug!(track = %track.id, url = %track.stream_url, "Transport load");
        let mut state = self.lock();
        state.loaded.push(track.id.clone());
        state.position = 0.0;
    }

    fn set_playing(&mut self, playing: bool) {
        tracing::debug!(playing, "Transport play state");
        self.lock().playing = playing;
    }

    fn set_volume(&mut self, level: f32) {
        tracing::debug!(level, "Transport volume");
        self.lock().volume = level;
    }

    fn seek(&mut self, fraction: f64) {
        tracing::debug!(fraction, "Transport seek");
        self.lock().position = fraction;
    }
}
