//! Volume control
//!
//! The streaming widget takes a linear level in 0.0-1.0, so unlike a
//! sample-processing player there is no dB mapping here: the level is passed
//! through as-is, or 0.0 while muted.

/// Volume controller
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Default level for a fresh player
    pub const DEFAULT_LEVEL: f32 = 0.8;

    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0.0-1.0, clamped)
    pub fn new(level: f32) -> Self {
        Self {
            level: Self::clamp(level),
            muted: false,
        }
    }

    /// Set volume level (0.0-1.0)
    ///
    /// Raising the level above zero while muted also unmutes.
    pub fn set_level(&mut self, level: f32) {
        self.level = Self::clamp(level);
        if self.level > 0.0 && self.muted {
            self.muted = false;
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level the transport should actually use
    ///
    /// Returns 0.0 if muted, otherwise the stored level
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    fn clamp(level: f32) -> f32 {
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}
