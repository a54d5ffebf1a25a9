//! sysvol - Query and control the system output volume.
//!
//! sysvol drives the volume and mute state of the default audio output
//! through whichever mixer tool is installed:
//!
//! - `pactl` (PulseAudio) when it is on `PATH`
//! - `amixer` (ALSA) otherwise
//!
//! The backend is chosen once when a [`VolumeService`](services::VolumeService)
//! is built; every operation spawns exactly one mixer process and parses its
//! text output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sysvol::services::VolumeService;
//!
//! let volume = VolumeService::new();
//! let sink = volume.resolve_sink()?;
//!
//! volume.set_volume(sink, 40)?;
//! println!("volume: {}%", volume.volume(sink)?);
//! # Ok::<(), sysvol::services::VolumeError>(())
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for volume control and configuration inspection.
pub mod cli;

/// Mixer backends and the volume service.
pub mod services;

/// Shared service container for CLI commands.
pub mod service_manager;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{Result, SysvolError};
