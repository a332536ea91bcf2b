//! Mood labels
//!
//! The closed set of moods a playlist can be tagged with. Labels compare
//! case-insensitively everywhere: `"Happy"`, `"HAPPY"` and `"happy"` all
//! name [`Mood::Happy`].

use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Mood tag attached to every playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Happy,
    Sad,
    Chill,
    Energetic,
    Angry,
    Anxious,
}

impl Mood {
    /// Every mood, in canonical order
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Chill,
        Mood::Energetic,
        Mood::Angry,
        Mood::Anxious,
    ];

    /// Lowercase label (`"happy"`, `"sad"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Chill => "chill",
            Mood::Energetic => "energetic",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
        }
    }

    /// Capitalised label for headings (`"Happy"`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Chill => "Chill",
            Mood::Energetic => "Energetic",
            Mood::Angry => "Angry",
            Mood::Anxious => "Anxious",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        let trimmed = label.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.matches(trimmed))
            .ok_or_else(|| CoreError::UnknownMood(label.to_string()))
    }

    /// Case-insensitive exact comparison against a raw label
    pub fn matches(&self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::parse(s)
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Mood::parse(&label).map_err(serde::de::Error::custom)
    }
}
