use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for managing configuration file paths
///
/// Provides methods to locate configuration directories and files following
/// the XDG Base Directory specification
pub struct ConfigPaths;

impl ConfigPaths {
    const APP_DIR: &'static str = "sysvol";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the configuration directory path for the application
    ///
    /// Follows the XDG Base Directory specification:
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "sysvol" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        Self::config_dir_from(
            env::var("XDG_CONFIG_HOME").ok(),
            env::var("HOME").ok(),
        )
    }

    /// Resolves the configuration directory from explicit variable values
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns an error if both values are missing
    pub fn config_dir_from(
        xdg_config_home: Option<String>,
        home: Option<String>,
    ) -> Result<PathBuf, Error> {
        let config_home = xdg_config_home
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                home.filter(|dir| !dir.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(config_home.join(Self::APP_DIR))
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
