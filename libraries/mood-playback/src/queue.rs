//! Up-next queue
//!
//! The queue is never edited piecemeal. It is derived wholesale from the
//! catalog whenever a track is selected and then only consumed from the
//! front:
//!
//! ```text
//! Playlist "happy-vibes":  [1] [2] [3] [4] [5]
//! Selected:                         ^
//! Queue:                               [4] [5]
//! ```

use mood_core::{Catalog, Track, TrackId};
use std::collections::VecDeque;

/// Tracks after `id` in the first playlist (catalog order) that contains it
///
/// Returns an empty queue when no playlist contains the track.
pub fn derive_queue(catalog: &Catalog, id: &TrackId) -> VecDeque<Track> {
    let Some(playlist) = catalog.first_playlist_containing(id) else {
        tracing::debug!(track = %id, "Track not in any playlist, queue is empty");
        return VecDeque::new();
    };

    // `first_playlist_containing` guarantees a position
    let start = playlist.position_of(id).map_or(playlist.len(), |i| i + 1);
    playlist.tracks[start..].iter().cloned().collect()
}

/// Forward-only queue of upcoming tracks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    tracks: VecDeque<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the queue that follows `id` in the catalog
    pub fn derive(catalog: &Catalog, id: &TrackId) -> Self {
        Self {
            tracks: derive_queue(catalog, id),
        }
    }

    /// Remove and return the next track
    pub fn pop_next(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Peek at next track without removing
    pub fn peek_next(&self) -> Option<&Track> {
        self.tracks.front()
    }

    /// Upcoming tracks in play order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::{Mood, Playlist};

    fn create_test_track(id: &str) -> Track {
        Track::new(id, format!("Track {id}"), "Test Artist", "3:00", format!("https://example.com/{id}"))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Playlist::new("first", "First", Mood::Happy)
                .with_tracks(["a", "b", "shared", "c"].map(create_test_track)),
            Playlist::new("second", "Second", Mood::Sad)
                .with_tracks(["shared", "d", "e"].map(create_test_track)),
        ])
        .unwrap()
    }

    fn ids(queue: &Queue) -> Vec<&str> {
        queue.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn derive_takes_tracks_after_selection() {
        let queue = Queue::derive(&catalog(), &TrackId::new("a"));
        assert_eq!(ids(&queue), ["b", "shared", "c"]);
    }

    #[test]
    fn derive_uses_first_playlist_in_catalog_order() {
        let queue = Queue::derive(&catalog(), &TrackId::new("shared"));
        assert_eq!(ids(&queue), ["c"]);
    }

    #[test]
    fn derive_last_track_is_empty() {
        assert!(Queue::derive(&catalog(), &TrackId::new("e")).is_empty());
    }

    #[test]
    fn derive_unknown_track_is_empty() {
        assert!(Queue::derive(&catalog(), &TrackId::new("nowhere")).is_empty());
    }

    #[test]
    fn pop_next_consumes_front() {
        let mut queue = Queue::derive(&catalog(), &TrackId::new("d"));
        assert_eq!(queue.peek_next().unwrap().id.as_str(), "e");
        assert_eq!(queue.pop_next().unwrap().id.as_str(), "e");
        assert!(queue.pop_next().is_none());
        assert!(queue.is_empty());
    }
}
