//! MoodTune Core
//!
//! Domain types, the static playlist catalog and the mood filter.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `Mood`, and their ids
//! - **Catalog**: the immutable, ordered playlist collection loaded at startup
//! - **Filter**: mood-based playlist selection with full-catalog fallback
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use mood_core::{filter_by_mood, Catalog, Mood};
//!
//! let catalog = Catalog::builtin();
//!
//! // Case-insensitive match on the playlist mood
//! let chill = filter_by_mood(&catalog, "Chill");
//! assert!(chill.iter().all(|p| p.mood == Mood::Chill));
//!
//! // Unknown moods show the whole catalog
//! assert_eq!(filter_by_mood(&catalog, "bored").len(), catalog.len());
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod types;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use filter::{browse_title, filter_by_mood, filter_by_mood_tag};
pub use types::{Mood, Playlist, PlaylistId, Track, TrackId};
