//! Command-line interface for volume control.
//!
//! Provides a hierarchical command system on top of the volume service.
//! Commands are organized by category and automatically generate help
//! text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
