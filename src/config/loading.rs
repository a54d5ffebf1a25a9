use std::{fs, path::Path};

use toml::Value;
use tracing::debug;

use super::{AudioConfig, Config};
use crate::{Result, SysvolError};

const DEFAULT_FILE_HEADER: &str = "\
# sysvol configuration file
#
# [general]
# log_level = \"warn\"
#
# [audio]
# backend = \"auto\"   # auto | pactl | amixer
# sink = 0           # skip default sink discovery
# step = 5           # percentage for `volume up` / `volume down`
";

impl Config {
    /// Loads the configuration file at `path`
    ///
    /// A missing file is created with a commented header and the defaults
    /// are returned. Keys absent from the file take their default values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file or its directory cannot be created or read
    /// - The TOML content is invalid
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!(path = %path.display(), "creating default config file");
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| SysvolError::io_at(e, path))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| SysvolError::toml_parse(e, Some(path)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value fails validation
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| SysvolError::toml_parse(e, None))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express
    ///
    /// # Errors
    ///
    /// Returns `SysvolError::InvalidConfigField` if `audio.step` is outside 1..=100
    pub fn validate(&self) -> Result<()> {
        let step = self.audio.step;
        if step == 0 || step > 100 {
            return Err(SysvolError::InvalidConfigField {
                field: "step".to_string(),
                component: "audio".to_string(),
                reason: format!("{step} is not between 1 and 100"),
            });
        }

        Ok(())
    }

    /// Renders the configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SysvolError::ConfigValidation {
            component: "config serialization".to_string(),
            details: e.to_string(),
        })
    }

    /// Looks up a value by dot-separated path, e.g. `audio.step`
    ///
    /// # Errors
    ///
    /// Returns `SysvolError::InvalidConfigField` if the path does not exist
    pub fn get_by_path(&self, path: &str) -> Result<Value> {
        let root = Value::try_from(self).map_err(|e| SysvolError::ConfigValidation {
            component: "config serialization".to_string(),
            details: e.to_string(),
        })?;

        navigate_path(&root, path)
    }
}

impl AudioConfig {
    /// Step as a signed delta for `volume up`/`volume down`
    pub fn step_delta(&self) -> i32 {
        i32::from(self.step)
    }
}

fn navigate_path(value: &Value, path: &str) -> Result<Value> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        let Value::Table(table) = current else {
            return Err(invalid_path(
                &parts[..i].join("."),
                format!("cannot navigate into {}", current.type_str()),
            ));
        };

        current = table.get(*part).ok_or_else(|| {
            invalid_path(path, format!("key '{part}' not found"))
        })?;
    }

    Ok(current.clone())
}

fn invalid_path(path: &str, reason: String) -> SysvolError {
    let (component, field) = path.rsplit_once('.').unwrap_or(("config", path));

    SysvolError::InvalidConfigField {
        field: field.to_string(),
        component: component.to_string(),
        reason,
    }
}

/// Creates a default configuration file, including its parent directory
fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SysvolError::io_at(e, parent))?;
    }

    fs::write(path, DEFAULT_FILE_HEADER).map_err(|e| SysvolError::io_at(e, path))?;

    Ok(())
}
