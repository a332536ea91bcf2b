//! Player controller - core orchestration
//!
//! Owns the playback session together with everything the presentation layer
//! needs around it: active mood, volume, transport telemetry and the event
//! buffer. All mutation goes through this type; nothing is shared globally.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    session::PlaybackSession,
    transport::{clamp_fraction, Telemetry, TransportAdapter},
    types::{PlayerConfig, SessionState},
    volume::Volume,
};
use mood_core::{browse_title, filter_by_mood_tag, Catalog, Mood, Playlist, Track, TrackId};
use std::sync::Arc;

/// Central player management
///
/// Handles, one at a time:
/// - user actions (select, play/pause, next, previous, seek, volume, mood)
/// - transport callbacks (progress, duration, end-of-track)
///
/// Callbacks are last-write-wins: whichever call arrives last determines the
/// state.
pub struct PlayerController {
    session: PlaybackSession,
    mood: Option<Mood>,
    volume: Volume,
    telemetry: Telemetry,
    transport: Option<Box<dyn TransportAdapter>>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller over a catalog
    pub fn new(catalog: Arc<Catalog>, config: PlayerConfig) -> Self {
        let mut volume = Volume::new(config.initial_volume);
        if config.start_muted {
            volume.mute();
        }

        Self {
            session: PlaybackSession::new(catalog),
            mood: None,
            volume,
            telemetry: Telemetry::default(),
            transport: None,
            pending_events: Vec::new(),
        }
    }

    /// Attach the external player
    ///
    /// The transport is brought up to date with the current track, play
    /// flag and volume.
    pub fn set_transport(&mut self, mut transport: Box<dyn TransportAdapter>) {
        transport.set_volume(self.volume.effective());
        if let Some(track) = self.session.current_track() {
            transport.load(track);
            transport.set_playing(self.session.is_playing());
        }
        self.transport = Some(transport);
    }

    /// Detach the external player
    pub fn take_transport(&mut self) -> Option<Box<dyn TransportAdapter>> {
        self.transport.take()
    }

    // ===== Playback Control =====

    /// Select a catalog track by id and start playing it
    pub fn select_track(&mut self, id: &TrackId) -> Result<()> {
        let track = self
            .session
            .catalog()
            .track(id)
            .cloned()
            .ok_or_else(|| PlaybackError::UnknownTrack(id.clone()))?;
        self.select(track);
        Ok(())
    }

    /// Select a track (catalog member or not) and start playing it
    pub fn select(&mut self, track: Track) {
        self.apply(|session| {
            session.select_track(track);
            true
        });
    }

    /// Start or resume playback
    pub fn play(&mut self) {
        self.apply(|session| {
            session.resume();
            false
        });
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.apply(|session| {
            session.pause();
            false
        });
    }

    /// Play if paused, pause if playing
    pub fn toggle_play(&mut self) {
        if self.session.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Skip to next track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.apply(PlaybackSession::advance);
    }

    /// Go to previous track (unsupported, see [`PlaybackSession::retreat`])
    pub fn previous(&mut self) {
        self.apply(PlaybackSession::retreat);
    }

    // ===== Seek & Volume =====

    /// Seek to a fraction of the current track
    pub fn seek(&mut self, fraction: f64) {
        if self.session.current_track().is_none() {
            tracing::debug!("Seek requested with no current track");
            return;
        }

        let fraction = clamp_fraction(fraction);
        self.telemetry.set_progress(fraction);
        if let Some(transport) = self.transport.as_mut() {
            transport.seek(fraction);
        }
        self.emit_position_update();
    }

    /// Set volume (0.0-1.0)
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.sync_volume();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.sync_volume();
    }

    /// Get current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Mood =====

    /// Show playlists for a mood
    pub fn set_mood(&mut self, mood: Mood) {
        tracing::info!(%mood, "Mood set");
        self.mood = Some(mood);
        self.pending_events
            .push(PlayerEvent::MoodChanged { mood: Some(mood) });
    }

    /// Show the whole catalog again
    pub fn clear_mood(&mut self) {
        self.mood = None;
        self.pending_events.push(PlayerEvent::MoodChanged { mood: None });
    }

    /// Active mood
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Playlists matching the active mood (all of them when none is set)
    pub fn visible_playlists(&self) -> Vec<&Playlist> {
        let catalog = self.session.catalog();
        match self.mood {
            Some(mood) => filter_by_mood_tag(catalog, mood),
            None => catalog.playlists().iter().collect(),
        }
    }

    /// Heading for the visible playlists
    pub fn browse_title(&self) -> String {
        browse_title(self.mood)
    }

    // ===== Transport Callbacks =====

    /// Transport reported the fraction played
    pub fn on_progress(&mut self, fraction: f64) {
        if self.session.current_track().is_none() {
            return;
        }
        self.telemetry.set_progress(fraction);
        self.emit_position_update();
    }

    /// Transport learned the track duration
    pub fn on_duration(&mut self, secs: f64) {
        if self.session.current_track().is_none() {
            return;
        }
        self.telemetry.set_duration(secs);
        self.emit_position_update();
    }

    /// Transport reached the end of the current track
    pub fn on_track_ended(&mut self) {
        let Some(track) = self.session.current_track() else {
            tracing::debug!("End-of-track with no current track");
            return;
        };

        let track_id = track.id.clone();
        tracing::info!(track = %track_id, "Track finished");
        self.pending_events.push(PlayerEvent::TrackFinished { track_id });
        self.next();
    }

    // ===== State Queries =====

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.session.current_track()
    }

    /// Upcoming tracks in play order
    pub fn queue(&self) -> Vec<&Track> {
        self.session.queue().collect()
    }

    /// Number of upcoming tracks
    pub fn queue_len(&self) -> usize {
        self.session.queue_len()
    }

    /// Check if there is a next track
    pub fn has_next(&self) -> bool {
        self.session.has_next()
    }

    /// Check if there is a previous track
    pub fn has_previous(&self) -> bool {
        self.session.has_previous()
    }

    /// Last transport telemetry for the current track
    pub fn telemetry(&self) -> Telemetry {
        self.telemetry
    }

    /// Underlying session
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Catalog the player browses
    pub fn catalog(&self) -> &Arc<Catalog> {
        self.session.catalog()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Run a session operation, then mirror whatever changed to the
    /// transport and the event queue
    fn apply(&mut self, op: impl FnOnce(&mut PlaybackSession) -> bool) {
        let previous_id = self.session.current_track().map(|t| t.id.clone());
        let previous_state = self.session.state();
        let previous_queue_len = self.session.queue_len();

        let track_loaded = op(&mut self.session);

        if track_loaded {
            self.on_track_loaded(previous_id);
        }

        let state = self.session.state();
        if state != previous_state {
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
        if track_loaded || state != previous_state {
            let playing = self.session.is_playing();
            if let Some(transport) = self.transport.as_mut() {
                transport.set_playing(playing);
            }
        }

        let queue_len = self.session.queue_len();
        if track_loaded || queue_len != previous_queue_len {
            self.pending_events
                .push(PlayerEvent::QueueChanged { length: queue_len });
        }
    }

    /// A (possibly identical) track was made current
    fn on_track_loaded(&mut self, previous_track_id: Option<TrackId>) {
        self.telemetry.reset();

        let Some(track) = self.session.current_track() else {
            return;
        };
        tracing::info!(track = %track.id, title = %track.title, "Now playing");

        if let Some(transport) = self.transport.as_mut() {
            transport.load(track);
        }
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });
    }

    fn sync_volume(&mut self) {
        let effective = self.volume.effective();
        if let Some(transport) = self.transport.as_mut() {
            transport.set_volume(effective);
        }
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_position_update(&mut self) {
        self.pending_events.push(PlayerEvent::PositionUpdate {
            progress: self.telemetry.progress(),
            duration_secs: self.telemetry.duration_secs(),
        });
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()), PlayerConfig::default())
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("session", &self.session)
            .field("mood", &self.mood)
            .field("volume", &self.volume)
            .field("telemetry", &self.telemetry)
            .field("has_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> PlayerController {
        PlayerController::new(Arc::new(Catalog::builtin()), PlayerConfig::default())
    }

    #[test]
    fn create_player_controller() {
        let controller = controller();
        assert_eq!(controller.state(), SessionState::Idle);
        assert_eq!(controller.volume(), 0.8);
        assert!(!controller.is_muted());
        assert!(controller.mood().is_none());
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn start_muted_config() {
        let controller = PlayerController::new(
            Arc::new(Catalog::builtin()),
            PlayerConfig {
                initial_volume: 0.4,
                start_muted: true,
            },
        );
        assert!(controller.is_muted());
        assert_eq!(controller.volume(), 0.4);
    }

    #[test]
    fn select_unknown_track_is_an_error() {
        let mut controller = controller();
        let result = controller.select_track(&TrackId::new("missing"));
        assert!(matches!(result, Err(PlaybackError::UnknownTrack(_))));
        assert_eq!(controller.state(), SessionState::Idle);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn select_emits_track_state_and_queue_events() {
        let mut controller = controller();
        controller.select_track(&TrackId::new("sad-2")).unwrap();

        let events = controller.drain_events();
        assert_eq!(
            events,
            vec![
                PlayerEvent::TrackChanged {
                    track_id: TrackId::new("sad-2"),
                    previous_track_id: None,
                },
                PlayerEvent::StateChanged {
                    state: SessionState::Playing
                },
                PlayerEvent::QueueChanged { length: 3 },
            ]
        );
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn toggle_play() {
        let mut controller = controller();
        controller.toggle_play();
        assert_eq!(controller.state(), SessionState::Idle);

        controller.select_track(&TrackId::new("chill-1")).unwrap();
        controller.toggle_play();
        assert_eq!(controller.state(), SessionState::Paused);
        controller.toggle_play();
        assert_eq!(controller.state(), SessionState::Playing);
    }

    #[test]
    fn mood_filters_visible_playlists() {
        let mut controller = controller();
        assert_eq!(controller.visible_playlists().len(), 6);
        assert_eq!(controller.browse_title(), "Featured Playlists");

        controller.set_mood(Mood::Anxious);
        let visible = controller.visible_playlists();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].mood, Mood::Anxious);
        assert_eq!(controller.browse_title(), "Anxious Mood Playlists");

        controller.clear_mood();
        assert_eq!(controller.visible_playlists().len(), 6);
    }

    #[test]
    fn mood_does_not_touch_playback() {
        let mut controller = controller();
        controller.select_track(&TrackId::new("happy-1")).unwrap();
        controller.set_mood(Mood::Sad);

        assert_eq!(controller.current_track().unwrap().id, TrackId::new("happy-1"));
        assert_eq!(controller.queue_len(), 4);
    }

    #[test]
    fn telemetry_ignored_when_idle() {
        let mut controller = controller();
        controller.on_progress(0.5);
        controller.on_duration(120.0);
        controller.on_track_ended();
        controller.seek(0.3);

        assert_eq!(controller.telemetry(), Telemetry::default());
        assert!(!controller.has_pending_events());
    }
}
