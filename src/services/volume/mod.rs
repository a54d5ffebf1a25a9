//! System volume and mute control.
//!
//! Shells out to `pactl` when it is installed and to `amixer` otherwise,
//! turning their text output into a percentage and a mute flag.

/// Per-tool command builders and output parsers
pub mod backend;
/// Command line representation
pub mod command;
/// Default sink discovery
pub mod discovery;
/// Error types
pub mod error;
mod parsing;
/// External process boundary
pub mod runner;
/// Volume service facade
pub mod service;
/// Sink, volume and backend types
pub mod types;

#[cfg(test)]
mod tests;

pub use backend::{AmixerBackend, MixerBackend, PactlBackend};
pub use command::{CommandLine, Operation};
pub use error::VolumeError;
pub use runner::{CommandRunner, SystemRunner};
pub use service::VolumeService;
pub use types::{BackendKind, Percent, SinkId};
