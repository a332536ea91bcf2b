/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A streamable track
///
/// Immutable once the catalog is loaded. Playback happens through an external
/// streaming widget, so the track only carries a locator, not audio data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist display string (may name several artists)
    pub artist: String,

    /// Duration as displayed, e.g. `"3:53"`
    pub duration: String,

    /// External stream locator handed to the transport
    pub stream_url: String,

    /// Cover image locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Track {
    /// Create a track without cover art
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            duration: duration.into(),
            stream_url: stream_url.into(),
            cover_url: None,
        }
    }

    /// Attach a cover image locator
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    /// Parse the display duration (`m:ss` or `h:mm:ss`) into seconds
    ///
    /// Returns `None` for anything that is not a colon-separated list of
    /// integers with two-digit seconds (and minutes, when hours are present).
    pub fn duration_secs(&self) -> Option<u64> {
        let parts: Vec<&str> = self.duration.trim().split(':').collect();
        let numbers = parts
            .iter()
            .map(|p| p.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()?;

        match numbers.as_slice() {
            [m, s] if parts[1].len() == 2 && *s < 60 => Some(m * 60 + s),
            [h, m, s] if parts[1].len() == 2 && parts[2].len() == 2 && *m < 60 && *s < 60 => {
                Some(h * 3600 + m * 60 + s)
            }
            _ => None,
        }
    }
}
