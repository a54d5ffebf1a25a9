use std::{path::PathBuf, sync::Arc};

use tracing::debug;

use crate::{
    config::{BackendPreference, Config},
    services::{BackendKind, SinkId, VolumeError, VolumeService, volume::SystemRunner},
};

/// Container for the services shared by CLI commands
///
/// Built once at startup; commands hold `Arc` clones of what they need.
#[derive(Debug, Clone)]
pub struct Services {
    /// Volume control for the selected backend
    pub volume: Arc<VolumeService>,
    /// Effective configuration
    pub config: Arc<Config>,
    /// Location the configuration was loaded from
    pub config_path: PathBuf,
}

impl Services {
    /// Create all application services
    ///
    /// `backend_override` replaces `audio.backend`, so an explicit `auto`
    /// detects from `PATH` even when the config forces a backend.
    pub fn new(
        config: Config,
        config_path: PathBuf,
        backend_override: Option<BackendPreference>,
    ) -> Self {
        let preference = backend_override.unwrap_or(config.audio.backend);

        let volume = match preference.forced() {
            Some(kind) => {
                debug!(backend = %kind, "using configured volume backend");
                VolumeService::with_backend(kind, Arc::new(SystemRunner))
            }
            None => VolumeService::new(),
        };

        Self::with_volume_service(volume, config, config_path)
    }

    /// Assemble services around an existing volume service
    pub fn with_volume_service(
        volume: VolumeService,
        config: Config,
        config_path: PathBuf,
    ) -> Self {
        Self {
            volume: Arc::new(volume),
            config: Arc::new(config),
            config_path,
        }
    }

    /// Sink that volume and mute commands act on
    ///
    /// Uses `audio.sink` when configured, otherwise discovers the default
    /// sink. amixer ignores the sink, so with that backend a failed
    /// discovery falls back to sink 0.
    ///
    /// # Errors
    /// Returns the discovery error when the pactl backend is active
    pub fn target_sink(&self) -> Result<SinkId, VolumeError> {
        if let Some(sink) = self.config.audio.sink {
            return Ok(sink);
        }

        match self.volume.resolve_sink() {
            Ok(sink) => Ok(sink),
            Err(err) if self.volume.backend_kind() == BackendKind::Amixer => {
                debug!(error = %err, "sink discovery failed, amixer does not need one");
                Ok(SinkId::default())
            }
            Err(err) => Err(err),
        }
    }
}
