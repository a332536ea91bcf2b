//! Static playlist catalog
//!
//! The catalog is loaded once at startup and never refetched or mutated.
//! Consumers share it behind an `Arc`.

use crate::error::{CoreError, Result};
use crate::types::{Playlist, PlaylistId, Track, TrackId};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Bundled catalog, embedded at compile time
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk representation
#[derive(Debug, Deserialize)]
struct CatalogFile {
    playlists: Vec<Playlist>,
}

/// Immutable, ordered collection of playlists
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Build a catalog from playlists in display order
    ///
    /// Playlist ids must be unique, and a playlist may not list the same
    /// track twice. A track may belong to several playlists.
    pub fn new(playlists: Vec<Playlist>) -> Result<Self> {
        let mut playlist_ids = HashSet::new();
        for playlist in &playlists {
            if !playlist_ids.insert(&playlist.id) {
                return Err(CoreError::DuplicatePlaylist(playlist.id.clone()));
            }

            let mut track_ids = HashSet::new();
            for track in &playlist.tracks {
                if !track_ids.insert(&track.id) {
                    return Err(CoreError::DuplicateTrack {
                        playlist: playlist.id.clone(),
                        track: track.id.clone(),
                    });
                }
            }
        }

        tracing::debug!(playlists = playlists.len(), "Catalog built");
        Ok(Self { playlists })
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.playlists)
    }

    /// Parse a catalog from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.playlists)
    }

    /// Load a catalog file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading catalog from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_CATALOG).unwrap_or_else(|err| {
            tracing::error!("Bundled catalog is invalid: {err}");
            Self::default()
        })
    }

    /// All playlists in catalog order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether the catalog has no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Look up a playlist by id
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// First playlist, in catalog order, that contains the track
    pub fn first_playlist_containing(&self, id: &TrackId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.contains(id))
    }

    /// Look up a track by id (first occurrence in catalog order)
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.playlists
            .iter()
            .flat_map(|p| p.tracks.iter())
            .find(|t| &t.id == id)
    }

    /// Iterate over every track occurrence in catalog order
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.playlists.iter().flat_map(|p| p.tracks.iter())
    }
}
