//! Configuration schema definitions and validation.
//!
//! Defines the configuration structure for sysvol: general settings and
//! audio backend settings. All configurations are serializable to/from TOML.

mod audio;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use audio::{AudioConfig, BackendPreference};
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for sysvol.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Audio backend and sink settings.
    #[serde(default)]
    pub audio: AudioConfig,
}
