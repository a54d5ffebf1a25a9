use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::VolumeError;

/// Identifier of an audio output sink
///
/// Only the pactl backend addresses sinks; amixer accepts the id and ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SinkId(pub u32);

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute volume level, 0 to 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// Highest accepted level
    pub const MAX: u8 = 100;

    /// Validate a caller-supplied level
    ///
    /// # Errors
    /// Returns `VolumeError::VolumeOutOfRange` if `value` is outside 0..=100
    pub fn new(value: i32) -> Result<Self, VolumeError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(VolumeError::VolumeOutOfRange(value))
    }

    /// Level as a plain integer
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Percent {
    type Error = VolumeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Which control utility the service drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// PulseAudio `pactl`, sink oriented
    Pactl,
    /// ALSA `amixer`, single `Master` channel
    Amixer,
}

impl BackendKind {
    /// Executable name of the control utility
    pub fn program(self) -> &'static str {
        match self {
            Self::Pactl => "pactl",
            Self::Amixer => "amixer",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
