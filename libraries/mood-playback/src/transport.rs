//! Transport adapter boundary
//!
//! Actual streaming is done by an external player widget. The controller
//! pushes commands at it and receives telemetry back through
//! [`crate::PlayerController::on_progress`] and friends.

use mood_core::Track;

/// External player that streams a track
///
/// Commands are fire-and-forget. Implementations report progress, duration
/// and end-of-track back to the controller on their own schedule.
pub trait TransportAdapter {
    /// Start streaming `track` from the beginning
    fn load(&mut self, track: &Track);

    /// Play (`true`) or pause (`false`)
    fn set_playing(&mut self, playing: bool);

    /// Output level, 0.0-1.0
    fn set_volume(&mut self, level: f32);

    /// Jump to a fraction (0.0-1.0) of the track
    fn seek(&mut self, fraction: f64);
}

/// Last telemetry reported by the transport for the current track
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Telemetry {
    /// Fraction played, 0.0-1.0
    progress: f64,

    /// Total duration once the transport knows it
    duration_secs: Option<f64>,
}

impl Telemetry {
    /// Fraction of the track played
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Duration in seconds, if reported
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Elapsed seconds (0 until the duration is known)
    pub fn position_secs(&self) -> f64 {
        self.duration_secs.map_or(0.0, |d| self.progress * d)
    }

    pub(crate) fn set_progress(&mut self, fraction: f64) {
        self.progress = clamp_fraction(fraction);
    }

    pub(crate) fn set_duration(&mut self, secs: f64) {
        if secs.is_finite() && secs >= 0.0 {
            self.duration_secs = Some(secs);
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Clamp to 0.0-1.0, mapping NaN to 0.0
pub(crate) fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Format seconds as `m:ss`
///
/// Minutes are not wrapped into hours. Negative or non-finite input formats
/// as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
