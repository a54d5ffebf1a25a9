/// ALSA `amixer` backend
pub mod amixer;
/// PulseAudio `pactl` backend
pub mod pactl;

use std::{
    env,
    ffi::OsStr,
    fs,
    os::unix::fs::PermissionsExt,
    path::Path,
};

use tracing::debug;

pub use amixer::AmixerBackend;
pub use pactl::PactlBackend;

use super::{BackendKind, CommandLine, Operation, SinkId, VolumeError};

/// Command builder and output parser for one control utility
///
/// Both halves live on the same object so a command is always parsed by the
/// reader that matches the tool it ran.
pub trait MixerBackend: Send + Sync {
    /// Which utility this backend drives
    fn kind(&self) -> BackendKind;

    /// Argument vector for `operation` against `sink`
    fn command(&self, operation: Operation, sink: SinkId) -> CommandLine;

    /// Extract the volume percentage of `sink` from the tool's status output
    ///
    /// # Errors
    /// Returns `VolumeError::NoVolumeFound` if the output has no usable volume
    fn parse_volume(&self, sink: SinkId, output: &str) -> Result<u32, VolumeError>;

    /// Extract the mute state of `sink` from the tool's status output
    ///
    /// # Errors
    /// Returns `VolumeError::NoMuteInfoFound` if the output has no mute token
    fn parse_muted(&self, sink: SinkId, output: &str) -> Result<bool, VolumeError>;
}

/// Instantiate the backend for `kind`
pub fn backend_for(kind: BackendKind) -> Box<dyn MixerBackend> {
    match kind {
        BackendKind::Pactl => Box::new(PactlBackend),
        BackendKind::Amixer => Box::new(AmixerBackend),
    }
}

impl BackendKind {
    /// Pick a backend from the current `PATH`
    ///
    /// `pactl` wins when it is installed; otherwise `amixer` is used. A missing
    /// `pactl` is not an error.
    pub fn detect() -> Self {
        let path = env::var_os("PATH").unwrap_or_default();
        Self::detect_in(&path)
    }

    /// Pick a backend by searching the given `PATH`-style directory list
    pub fn detect_in(path: &OsStr) -> Self {
        let kind = if find_executable(BackendKind::Pactl.program(), path) {
            BackendKind::Pactl
        } else {
            BackendKind::Amixer
        };

        debug!(backend = %kind, "selected volume backend");
        kind
    }
}

fn find_executable(program: &str, path: &OsStr) -> bool {
    env::split_paths(path).any(|dir| is_executable(&dir.join(program)))
}

fn is_executable(candidate: &Path) -> bool {
    fs::metadata(candidate)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
