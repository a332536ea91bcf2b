//! Property-based tests for the mood filter
//!
//! Uses proptest to check the filter invariants across random catalogs.

use mood_core::{filter_by_mood, Catalog, Mood, Playlist, Track};
use proptest::prelude::*;
use std::collections::HashSet;

// ===== Helpers =====

fn arbitrary_mood() -> impl Strategy<Value = Mood> {
    prop::sample::select(Mood::ALL.to_vec())
}

fn arbitrary_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((arbitrary_mood(), 0usize..6), 0..12).prop_map(|specs| {
        let playlists = specs
            .into_iter()
            .enumerate()
            .map(|(i, (mood, track_count))| {
                Playlist::new(format!("playlist-{i}"), format!("Playlist {i}"), mood).with_tracks(
                    (0..track_count).map(|t| {
                        Track::new(
                            format!("track-{i}-{t}"),
                            format!("Track {t}"),
                            "Artist",
                            "3:00",
                            format!("https://example.com/{i}/{t}"),
                        )
                    }),
                )
            })
            .collect();
        Catalog::new(playlists).expect("generated ids are unique")
    })
}

/// Labels: known moods in random case, plus arbitrary junk
fn arbitrary_label() -> impl Strategy<Value = String> {
    prop_oneof![
        (arbitrary_mood(), any::<bool>()).prop_map(|(mood, upper)| if upper {
            mood.as_str().to_uppercase()
        } else {
            mood.as_str().to_string()
        }),
        "[a-zA-Z]{0,10}",
    ]
}

fn ids(playlists: &[&Playlist]) -> Vec<String> {
    playlists.iter().map(|p| p.id.to_string()).collect()
}

// ===== Property Tests =====

proptest! {
    /// Property: a non-empty catalog never filters down to nothing
    #[test]
    fn never_empty_for_non_empty_catalog(catalog in arbitrary_catalog(), label in arbitrary_label()) {
        let result = filter_by_mood(&catalog, &label);
        prop_assert_eq!(result.is_empty(), catalog.is_empty());
    }

    /// Property: the result is always a subset of the catalog
    #[test]
    fn result_is_subset_of_catalog(catalog in arbitrary_catalog(), label in arbitrary_label()) {
        let all: HashSet<String> = catalog.playlists().iter().map(|p| p.id.to_string()).collect();
        for id in ids(&filter_by_mood(&catalog, &label)) {
            prop_assert!(all.contains(&id));
        }
    }

    /// Property: filtering the result again by the same label is a no-op
    #[test]
    fn filtering_is_idempotent(catalog in arbitrary_catalog(), label in arbitrary_label()) {
        let first: Vec<Playlist> = filter_by_mood(&catalog, &label).into_iter().cloned().collect();
        let narrowed = Catalog::new(first.clone()).expect("subset keeps ids unique");
        let second: Vec<Playlist> = filter_by_mood(&narrowed, &label).into_iter().cloned().collect();
        prop_assert_eq!(first, second);
    }

    /// Property: when anything matches, only matching playlists are returned
    #[test]
    fn matches_exclude_other_moods(catalog in arbitrary_catalog(), mood in arbitrary_mood()) {
        let any_match = catalog.playlists().iter().any(|p| p.mood == mood);
        let result = filter_by_mood(&catalog, mood.as_str());
        if any_match {
            prop_assert!(result.iter().all(|p| p.mood == mood));
        } else {
            prop_assert_eq!(result.len(), catalog.len());
        }
    }
}
