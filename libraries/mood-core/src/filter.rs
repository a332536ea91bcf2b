//! Mood filter
//!
//! Maps a mood label to the playlists that should be visible. An empty match
//! falls back to the whole catalog, so a non-empty catalog never filters down
//! to nothing.

use crate::catalog::Catalog;
use crate::types::{Mood, Playlist};

/// Playlists whose mood matches `label`, ignoring case
///
/// Unknown labels match nothing and therefore return every playlist.
pub fn filter_by_mood<'a>(catalog: &'a Catalog, label: &str) -> Vec<&'a Playlist> {
    let matching: Vec<&Playlist> = catalog
        .playlists()
        .iter()
        .filter(|p| p.mood.matches(label))
        .collect();

    if matching.is_empty() {
        tracing::debug!(label, "No playlists for mood, showing full catalog");
        catalog.playlists().iter().collect()
    } else {
        matching
    }
}

/// [`filter_by_mood`] for an already-parsed mood
pub fn filter_by_mood_tag(catalog: &Catalog, mood: Mood) -> Vec<&Playlist> {
    filter_by_mood(catalog, mood.as_str())
}

/// Heading for the playlist browser
pub fn browse_title(mood: Option<Mood>) -> String {
    match mood {
        Some(mood) => format!("{} Mood Playlists", mood.display_name()),
        None => "Featured Playlists".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Track;

    fn playlist(id: &str, mood: Mood) -> Playlist {
        Playlist::new(id, id, mood).with_tracks([Track::new(
            format!("{id}-1"),
            "Song",
            "Artist",
            "3:00",
            "https://example.com",
        )])
    }

    #[test]
    fn matches_case_insensitively() {
        let catalog = Catalog::builtin();
        let result = filter_by_mood(&catalog, "HaPpY");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "happy-vibes");
    }

    #[test]
    fn keeps_catalog_order_for_multiple_matches() {
        let catalog = Catalog::new(vec![
            playlist("a", Mood::Sad),
            playlist("b", Mood::Happy),
            playlist("c", Mood::Sad),
        ])
        .unwrap();

        let ids: Vec<&str> = filter_by_mood(&catalog, "sad")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn no_match_falls_back_to_everything() {
        let catalog = Catalog::new(vec![playlist("a", Mood::Sad), playlist("b", Mood::Happy)]).unwrap();

        assert_eq!(filter_by_mood(&catalog, "angry").len(), 2);
        assert_eq!(filter_by_mood(&catalog, "not-a-mood").len(), 2);
        assert_eq!(filter_by_mood(&catalog, "").len(), 2);
    }

    #[test]
    fn empty_catalog_stays_empty() {
        let catalog = Catalog::default();
        assert!(filter_by_mood(&catalog, "happy").is_empty());
    }

    #[test]
    fn tag_filter_matches_label_filter() {
        let catalog = Catalog::builtin();
        for mood in Mood::ALL {
            assert_eq!(
                filter_by_mood_tag(&catalog, mood),
                filter_by_mood(&catalog, mood.as_str())
            );
        }
    }

    #[test]
    fn browse_titles() {
        assert_eq!(browse_title(None), "Featured Playlists");
        assert_eq!(browse_title(Some(Mood::Chill)), "Chill Mood Playlists");
    }
}
