//! MoodTune - command-line player
//!
//! Library half of the `moodtune` binary: configuration, a simulated
//! transport, and the pieces each subcommand is built from.

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod transport;

use mood_core::Mood;
use mood_detect::{DetectorConfig, FileCapture, MoodDetector, NoCamera, RandomMoodClassifier};
use std::path::PathBuf;

/// Detect a mood, from an image file if given or with no camera otherwise
pub async fn detect_mood(config: &DetectorConfig, image: Option<PathBuf>) -> Mood {
    let classifier = RandomMoodClassifier::from_config(config);
    match image {
        Some(path) => MoodDetector::new(FileCapture::new(path), classifier).detect().await,
        None => MoodDetector::new(NoCamera, classifier).detect().await,
    }
}
