mod ids;
mod mood;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId};
pub use mood::Mood;
pub use playlist::Playlist;
pub use track::Track;
