use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
};

/// Command for retrieving configuration values.
///
/// # Example Usage
///
/// ```bash
/// sysvol config get audio.backend
/// sysvol config get general.log_level
/// ```
pub struct GetCommand {
    services: Services,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided services.
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for GetCommand {
    /// Retrieves and formats a configuration value from the specified path.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no path argument is provided
    /// * `CliError::ConfigError` - If the path does not exist
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        let value = self.services.config.get_by_path(path)?;

        Ok(format!("{}: {}", path, format_toml_value(&value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration value".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Configuration path (e.g., audio.step)".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "sysvol config get audio.backend".to_string(),
                "sysvol config get general.log_level".to_string(),
            ],
        }
    }
}
