//! Detector configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated classifier latency used unless configured otherwise
pub const DEFAULT_LATENCY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Artificial delay before the classifier answers, in milliseconds
    pub latency_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl DetectorConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
