use std::collections::BTreeMap;

use crate::service_manager::Services;

use super::{
    CliError, Command,
    commands::{config, mute, sink, volume},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// The CommandRegistry provides a hierarchical structure for managing CLI commands,
/// allowing commands to be grouped by logical categories.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── volume
/// │   ├── get
/// │   ├── set
/// │   ├── adjust
/// │   ├── up
/// │   └── down
/// ├── mute
/// │   ├── get
/// │   ├── on
/// │   ├── off
/// │   └── toggle
/// ├── sink
/// │   ├── get
/// │   └── status
/// └── config
///     ├── path
///     ├── show
///     ├── get
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Category name -> (command name -> command implementation), kept sorted
    categories: BTreeMap<String, BTreeMap<String, Box<dyn Command>>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using the `register_command` method, typically during application initialization.
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's name (from its metadata) is used as the key within the
    /// category. A command with the same name in the category is replaced.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to register the command under (e.g., "volume", "mute")
    /// * `command` - The command implementation to register
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Arguments
    ///
    /// * `category` - The category containing the command
    /// * `command_name` - The name of the command to execute
    /// * `args` - Arguments to pass to the command
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if:
    /// - The specified category doesn't exist
    /// - The specified command doesn't exist within the category
    ///
    /// Returns `CliError::InvalidArguments` if the argument count does not
    /// match the command's metadata. Other errors come from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        self.categories
            .iter()
            .map(|(category, commands)| (category.clone(), commands.keys().cloned().collect()))
            .collect()
    }

    /// Metadata of every command in `category`, sorted by command name.
    pub fn category_metadata(&self, category: &str) -> Option<Vec<CommandMetadata>> {
        self.categories
            .get(category)
            .map(|commands| commands.values().map(|command| command.metadata()).collect())
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self, services: &Services) {
        volume::register_commands(self, services);
        mute::register_commands(self, services);
        sink::register_commands(self, services);
        config::register_commands(self, services);
    }
}
