/// Playlist domain type
use crate::types::{Mood, PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Mood-tagged playlist
///
/// Track order is meaningful: it defines what plays next when a track from
/// this playlist is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// The single mood this playlist is filed under
    pub mood: Mood,

    /// Cover image locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Ordered tracks
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(id: impl Into<PlaylistId>, name: impl Into<String>, mood: Mood) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            mood,
            cover_url: None,
            tracks: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append tracks in order
    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Index of the first occurrence of a track
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Whether the playlist contains a track
    pub fn contains(&self, id: &TrackId) -> bool {
        self.position_of(id).is_some()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(id, id, "Artist", "3:00", format!("https://example.com/{id}"))
    }

    #[test]
    fn position_of_finds_first_occurrence() {
        let playlist = Playlist::new("mix", "Mix", Mood::Chill)
            .with_tracks([track("a"), track("b"), track("c")]);

        assert_eq!(playlist.position_of(&TrackId::new("b")), Some(1));
        assert_eq!(playlist.position_of(&TrackId::new("z")), None);
        assert!(playlist.contains(&TrackId::new("c")));
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new("empty", "Empty", Mood::Sad).with_description("nothing yet");
        assert!(playlist.is_empty());
        assert_eq!(playlist.description, "nothing yet");
        assert!(playlist.cover_url.is_none());
    }
}
