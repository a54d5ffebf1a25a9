use thiserror::Error;

use crate::{SysvolError, services::VolumeError};

/// Errors that can occur during CLI command execution.
///
/// This enum represents all possible error conditions in the CLI system,
/// from command discovery failures to execution errors. Each variant provides
/// contextual information to help users understand what went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    ///
    /// This occurs when users specify a command that doesn't exist, either
    /// because the category is invalid or the command name is wrong within
    /// a valid category.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// This error is returned when argument validation fails, such as
    /// missing required arguments, too many arguments, or arguments
    /// that don't match the expected format.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] SysvolError),

    /// The mixer tool failed or printed nothing usable.
    #[error("Volume error: {0}")]
    Volume(#[from] VolumeError),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    OutputError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either a success message
/// as a String or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Used for help generation and argument count validation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "level", "delta", "path").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// An integer value, possibly signed.
    Number,

    /// A dot-separated configuration path.
    Path,
}

impl ArgType {
    /// Short hint shown in usage lines
    pub fn hint(self) -> &'static str {
        match self {
            ArgType::Number => "number",
            ArgType::Path => "path",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for everything about
/// a command: its identity, arguments, usage examples, and categorization.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "toggle").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "volume", "mute").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// All commands implement this trait to provide consistent execution
/// and metadata discovery. Commands receive dependencies through
/// their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates values itself.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, configuration
    /// errors, or mixer failures.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}

/// Parses a signed integer argument.
///
/// # Errors
///
/// Returns `CliError::InvalidArguments` naming the argument if parsing fails
pub fn parse_number_arg(name: &str, value: &str) -> Result<i32, CliError> {
    value.trim().parse::<i32>().map_err(|_| {
        CliError::InvalidArguments(format!("'{name}' must be a whole number, got '{value}'"))
    })
}
