//! Mood detector - capture once, then classify

use crate::capture::ImageCapture;
use crate::classifier::MoodClassifier;
use mood_core::Mood;

/// Runs one capture attempt and hands the result to a classifier
///
/// Always yields a mood. A failed capture is logged and the classifier is
/// called without an image.
#[derive(Debug)]
pub struct MoodDetector<C, M> {
    capture: C,
    classifier: M,
}

impl<C: ImageCapture, M: MoodClassifier> MoodDetector<C, M> {
    pub fn new(capture: C, classifier: M) -> Self {
        Self {
            capture,
            classifier,
        }
    }

    /// Detect the user's mood
    pub async fn detect(&self) -> Mood {
        let image = match self.capture.capture().await {
            Ok(image) if image.is_empty() => {
                tracing::warn!("Captured frame is empty, classifying without image");
                None
            }
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Image capture failed, classifying without image: {}", e);
                None
            }
        };

        let mood = self.classifier.classify(image.as_ref()).await;
        tracing::info!(%mood, captured = image.is_some(), "Mood detected");
        mood
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn classifier(&self) -> &M {
        &self.classifier
    }
}
