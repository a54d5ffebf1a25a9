use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use super::{
    BackendKind, CommandRunner, Operation, Percent, SinkId, SystemRunner, VolumeError,
    backend::{MixerBackend, backend_for},
    discovery,
};

/// System volume control through whichever mixer tool is installed
///
/// The backend is chosen once when the service is built and never
/// re-evaluated. Every operation spawns exactly one process and blocks until
/// it exits.
pub struct VolumeService {
    backend: Box<dyn MixerBackend>,
    runner: Arc<dyn CommandRunner>,
}

impl fmt::Debug for VolumeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeService")
            .field("backend", &self.backend.kind())
            .finish_non_exhaustive()
    }
}

impl Default for VolumeService {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeService {
    /// Create a service for the backend found on `PATH`
    pub fn new() -> Self {
        Self::with_backend(BackendKind::detect(), Arc::new(SystemRunner))
    }

    /// Create a service with an explicit backend and process runner
    pub fn with_backend(kind: BackendKind, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            backend: backend_for(kind),
            runner,
        }
    }

    /// Backend this service drives
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Discover the default output sink
    ///
    /// # Errors
    /// Returns an execution error if `pacmd` fails, or
    /// `VolumeError::NoFallbackSink` if no default sink is marked.
    #[instrument(skip(self))]
    pub fn resolve_sink(&self) -> Result<SinkId, VolumeError> {
        let output = self.runner.run(&discovery::discovery_command())?;
        let sink = discovery::parse_default_sink(&output)?;

        debug!(%sink, "resolved default sink");
        Ok(sink)
    }

    /// Current volume of `sink` in percent
    ///
    /// # Errors
    /// Returns an execution error, or `VolumeError::NoVolumeFound` if the
    /// tool's output has no volume for the sink.
    #[instrument(skip(self))]
    pub fn volume(&self, sink: SinkId) -> Result<u32, VolumeError> {
        let output = self.run(Operation::GetVolume, sink)?;
        self.backend.parse_volume(sink, &output)
    }

    /// Set the volume of `sink` to an absolute level
    ///
    /// The level is validated before any process is spawned.
    ///
    /// # Errors
    /// Returns `VolumeError::VolumeOutOfRange` if `volume` is not within
    /// 0..=100, or an execution error.
    #[instrument(skip(self))]
    pub fn set_volume(&self, sink: SinkId, volume: i32) -> Result<(), VolumeError> {
        let volume = Percent::new(volume)?;
        self.run(Operation::SetVolume(volume), sink).map(drop)
    }

    /// Raise (positive) or lower (negative) the volume of `sink`
    ///
    /// Not range checked; the tool clamps the result itself.
    ///
    /// # Errors
    /// Returns an execution error.
    #[instrument(skip(self))]
    pub fn adjust_volume(&self, sink: SinkId, delta: i32) -> Result<(), VolumeError> {
        self.run(Operation::AdjustVolume(delta), sink).map(drop)
    }

    /// Whether `sink` is muted
    ///
    /// # Errors
    /// Returns an execution error, or `VolumeError::NoMuteInfoFound` if the
    /// tool's output has no mute state for the sink.
    #[instrument(skip(self))]
    pub fn is_muted(&self, sink: SinkId) -> Result<bool, VolumeError> {
        let output = self.run(Operation::GetMute, sink)?;
        self.backend.parse_muted(sink, &output)
    }

    /// Mute `sink`
    ///
    /// # Errors
    /// Returns an execution error.
    #[instrument(skip(self))]
    pub fn mute(&self, sink: SinkId) -> Result<(), VolumeError> {
        self.run(Operation::Mute, sink).map(drop)
    }

    /// Unmute `sink`
    ///
    /// # Errors
    /// Returns an execution error.
    #[instrument(skip(self))]
    pub fn unmute(&self, sink: SinkId) -> Result<(), VolumeError> {
        self.run(Operation::Unmute, sink).map(drop)
    }

    /// Flip the mute state of `sink`, returning the new state
    ///
    /// Reads the state first, so this spawns two processes.
    ///
    /// # Errors
    /// Returns any error from reading or changing the mute state.
    pub fn toggle_mute(&self, sink: SinkId) -> Result<bool, VolumeError> {
        if self.is_muted(sink)? {
            self.unmute(sink)?;
            Ok(false)
        } else {
            self.mute(sink)?;
            Ok(true)
        }
    }

    fn run(&self, operation: Operation, sink: SinkId) -> Result<String, VolumeError> {
        let command = self.backend.command(operation, sink);
        debug!(backend = %self.backend.kind(), %command, "running mixer command");
        self.runner.run(&command)
    }
}
