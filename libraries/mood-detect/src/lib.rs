//! MoodTune - Mood Detection
//!
//! Capture a still frame, hand it to a classifier, get a [`Mood`] back.
//!
//! Both ends are traits so a real camera or emotion model can be dropped in
//! later:
//! - [`ImageCapture`] - one capture attempt, may fail
//! - [`MoodClassifier`] - always answers with a mood
//!
//! [`RandomMoodClassifier`] is the bundled classifier; it picks uniformly
//! from its label set, after a simulated delay when a frame was captured.
//!
//! # Example
//!
//! ```rust
//! use mood_detect::{MoodDetector, NoCamera, RandomMoodClassifier};
//! use std::time::Duration;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//!
//! let classifier = RandomMoodClassifier::new().with_latency(Duration::ZERO);
//! let detector = MoodDetector::new(NoCamera, classifier);
//!
//! // No camera: the classifier still answers
//! let mood = runtime.block_on(detector.detect());
//! println!("You seem {mood}");
//! ```
//!
//! [`Mood`]: mood_core::Mood

#![forbid(unsafe_code)]

mod capture;
mod classifier;
mod config;
mod detector;
mod error;

pub use capture::{CapturedImage, FileCapture, ImageCapture, NoCamera};
pub use classifier::{MoodClassifier, RandomMoodClassifier};
pub use config::{DetectorConfig, DEFAULT_LATENCY_MS};
pub use detector::MoodDetector;
pub use error::{CaptureError, Result};
