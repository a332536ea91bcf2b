/// Text output for the CLI
use mood_core::{Catalog, Playlist, Track};
use std::fmt::Write;

/// Heading followed by each playlist and its tracks
pub fn playlists(title: &str, playlists: &[&Playlist]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));

    for playlist in playlists {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} [{}] ({})",
            playlist.name, playlist.id, playlist.mood
        );
        if !playlist.description.is_empty() {
            let _ = writeln!(out, "  {}", playlist.description);
        }
        for (i, track) in playlist.tracks.iter().enumerate() {
            let _ = writeln!(out, "  {:>2}. {}", i + 1, track_line(track));
        }
    }

    out
}

/// Details for one track and what would play after it
pub fn track_info(catalog: &Catalog, track: &Track, queue: &[Track]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", track_line(track));
    let _ = writeln!(out, "  id:     {}", track.id);
    let _ = writeln!(out, "  stream: {}", track.stream_url);
    if let Some(cover) = &track.cover_url {
        let _ = writeln!(out, "  cover:  {cover}");
    }

    match catalog.first_playlist_containing(&track.id) {
        Some(playlist) => {
            let _ = writeln!(out, "  playlist: {} ({})", playlist.name, playlist.mood);
        }
        None => {
            let _ = writeln!(out, "  playlist: none");
        }
    }

    if queue.is_empty() {
        let _ = writeln!(out, "  up next: nothing");
    } else {
        let _ = writeln!(out, "  up next:");
        for next in queue {
            let _ = writeln!(out, "    - {}", track_line(next));
        }
    }

    out
}

fn track_line(track: &Track) -> String {
    format!("{} - {} ({})", track.title, track.artist, track.duration)
}
