use std::process::Command;

use tracing::{debug, instrument};

use super::{CommandLine, VolumeError};

/// Locale forced on every spawned tool; the parsers expect English C-locale tokens.
const LOCALE_ENV: [(&str, &str); 2] = [("LANG", "C"), ("LC_ALL", "C")];

/// Boundary to the operating system's process execution
///
/// Implementations run the command to completion and hand back its standard
/// output. A non-zero exit is an error.
pub trait CommandRunner: Send + Sync {
    /// Run `command` and capture its standard output
    ///
    /// # Errors
    /// Returns `VolumeError::Execution` if the process cannot be started and
    /// `VolumeError::NonZeroExit` if it reports failure.
    fn run(&self, command: &CommandLine) -> Result<String, VolumeError>;
}

/// Runs commands as child processes with the C locale
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandLine) -> Result<String, VolumeError> {
        let output = Command::new(command.program())
            .args(command.args())
            .envs(LOCALE_ENV)
            .output()
            .map_err(|e| VolumeError::Execution {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(VolumeError::NonZeroExit {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(bytes = output.stdout.len(), "command finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
