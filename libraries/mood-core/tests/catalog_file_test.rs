//! Catalog file loading tests

use mood_core::{Catalog, CoreError, Mood, TrackId};
use std::io::Write;
use tempfile::NamedTempFile;

const SMALL_CATALOG: &str = r#"{
  "playlists": [
    {
      "id": "rainy-day",
      "name": "Rainy Day",
      "description": "Grey skies",
      "mood": "Sad",
      "tracks": [
        { "id": "r1", "title": "Mad World", "artist": "Gary Jules", "duration": "3:08",
          "stream_url": "https://www.youtube.com/watch?v=4N3N1MlvVc4" },
        { "id": "r2", "title": "Hurt", "artist": "Johnny Cash", "duration": "3:38",
          "stream_url": "https://www.youtube.com/watch?v=8AHCfZTRGiI",
          "cover_url": "https://example.com/hurt.jpg" }
      ]
    }
  ]
}"#;

#[test]
fn load_catalog_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SMALL_CATALOG.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);

    let playlist = &catalog.playlists()[0];
    assert_eq!(playlist.mood, Mood::Sad);
    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[1].cover_url.as_deref(), Some("https://example.com/hurt.jpg"));
    assert_eq!(playlist.position_of(&TrackId::new("r2")), Some(1));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("nope.json"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn unknown_mood_in_file_is_rejected() {
    let json = SMALL_CATALOG.replace("\"Sad\"", "\"wistful\"");
    let result = Catalog::from_json_str(&json);
    assert!(matches!(result, Err(CoreError::Json(_))));
}
