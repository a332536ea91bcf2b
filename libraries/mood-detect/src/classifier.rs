//! Mood classification
//!
//! [`MoodClassifier`] is the seam for a real emotion model. The bundled
//! [`RandomMoodClassifier`] ignores the image and draws a label uniformly at
//! random. A captured frame is "analysed" for a simulated delay; without one
//! the fallback draw answers immediately.

use crate::capture::CapturedImage;
use crate::config::DetectorConfig;
use async_trait::async_trait;
use mood_core::Mood;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Maps a captured image to a mood
///
/// Infallible: an implementation that cannot make sense of the image (or is
/// given none) still answers with some mood.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    /// Classify a frame; `None` means capture failed and the answer should
    /// come without delay
    async fn classify(&self, image: Option<&CapturedImage>) -> Mood;
}

/// Classifier stand-in that picks a random label
pub struct RandomMoodClassifier {
    labels: Vec<Mood>,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl RandomMoodClassifier {
    /// All six moods, default latency, entropy-seeded
    pub fn new() -> Self {
        Self::from_config(&DetectorConfig::default())
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            labels: Mood::ALL.to_vec(),
            latency: config.latency(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Restrict the draw to `labels`
    ///
    /// An empty set falls back to every mood.
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Mood>) -> Self {
        let mut labels: Vec<Mood> = labels.into_iter().collect();
        if labels.is_empty() {
            tracing::warn!("Empty mood label set, using all moods");
            labels = Mood::ALL.to_vec();
        }
        self.labels = labels;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Deterministic draw sequence
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn labels(&self) -> &[Mood] {
        &self.labels
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn draw(&self) -> Mood {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.labels
            .choose(&mut *rng)
            .copied()
            .unwrap_or(Mood::Happy)
    }
}

impl Default for RandomMoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomMoodClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomMoodClassifier")
            .field("labels", &self.labels)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MoodClassifier for RandomMoodClassifier {
    async fn classify(&self, image: Option<&CapturedImage>) -> Mood {
        tracing::debug!(
            image_bytes = image.map_or(0, CapturedImage::len),
            latency_ms = self.latency.as_millis() as u64,
            "Classifying"
        );

        if image.is_some() && !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.draw()
    }
}
