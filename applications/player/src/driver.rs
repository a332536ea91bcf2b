/// Drives a player through its queue the way a streaming widget would
use mood_playback::{format_time, PlayerController, PlayerEvent};

/// One track the driver played to the end
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedTrack {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// `m:ss` at the last progress tick
    pub position: String,
}

/// Play the current track and everything queued after it
///
/// Each track gets its duration reported, `ticks` evenly spaced progress
/// updates and an end-of-track callback. Stops once the queue is drained.
pub fn play_through(player: &mut PlayerController, ticks: u32) -> Vec<PlayedTrack> {
    let ticks = ticks.max(1);
    let mut played = Vec::new();

    while let Some(track) = player.current_track().cloned() {
        if let Some(secs) = track.duration_secs() {
            player.on_duration(secs as f64);
        }
        for tick in 1..=ticks {
            player.on_progress(f64::from(tick) / f64::from(ticks));
        }

        played.push(PlayedTrack {
            id: track.id.to_string(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            position: format_time(player.telemetry().position_secs()),
        });

        let has_next = player.has_next();
        player.on_track_ended();

        for event in player.drain_events() {
            if let Some(json) = event_json(&event) {
                tracing::debug!(event = %json, "Player event");
            }
        }

        if !has_next {
            break;
        }
    }

    played
}

/// One-line JSON form of an event for the debug log
pub fn event_json(event: &PlayerEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!("Failed to serialize player event: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::{Mood, TrackId};

    #[test]
    fn event_json_is_externally_tagged() {
        let event = PlayerEvent::TrackFinished {
            track_id: TrackId::new("happy-3"),
        };
        assert_eq!(
            event_json(&event).unwrap(),
            r#"{"TrackFinished":{"track_id":"happy-3"}}"#
        );

        let event = PlayerEvent::MoodChanged {
            mood: Some(Mood::Chill),
        };
        assert_eq!(
            event_json(&event).unwrap(),
            r#"{"MoodChanged":{"mood":"chill"}}"#
        );
    }
}
