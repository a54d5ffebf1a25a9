use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::{BackendKind, SinkId};

/// Which mixer tool to drive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Use `pactl` if it is on `PATH`, otherwise `amixer`.
    #[default]
    Auto,

    /// Always use `pactl`.
    Pactl,

    /// Always use `amixer`.
    Amixer,
}

impl BackendPreference {
    /// Backend forced by this preference, `None` for auto-detection.
    pub fn forced(self) -> Option<BackendKind> {
        match self {
            BackendPreference::Auto => None,
            BackendPreference::Pactl => Some(BackendKind::Pactl),
            BackendPreference::Amixer => Some(BackendKind::Amixer),
        }
    }
}

/// Audio control settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Mixer tool selection.
    pub backend: BackendPreference,

    /// Sink to control. Discovered through `pacmd` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<SinkId>,

    /// Percentage used by `volume up` and `volume down` (1-100).
    pub step: u8,
}

impl AudioConfig {
    /// Step used when none is configured.
    pub const DEFAULT_STEP: u8 = 5;
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::Auto,
            sink: None,
            step: Self::DEFAULT_STEP,
        }
    }
}
