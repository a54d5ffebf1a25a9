use crate::service_manager::Services;

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_usage,
    },
};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `services` - Shared services handed to the commands
    pub fn new(services: &Services) -> Self {
        let mut registry = CommandRegistry::new();
        registry.register_all_commands(services);

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` as the category (or an empty command name) renders help text
    /// instead of running anything.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("help", "") => Ok(self.help_text()),
            ("help", category) | (category, "help") => self.category_help(category),
            (category, "") => self.category_help(category),
            _ => self.registry.execute(category, command_name, args),
        }
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every category and its commands
    pub fn help_text(&self) -> String {
        let mut out = format!("{}\n", format_header("sysvol - system volume control"));
        out.push_str(&format_usage(
            "usage: sysvol [--config <path>] [--backend <auto|pactl|amixer>] <category> <command> [args]",
        ));
        out.push('\n');

        for (category, _) in self.list_all() {
            out.push_str(&format!("\n{}\n", format_category(&category)));
            for metadata in self.registry.category_metadata(&category).unwrap_or_default() {
                out.push_str(&format!(
                    "  {:<10} {}\n",
                    format_command(&metadata.name),
                    format_description(&metadata.description)
                ));
            }
        }

        out.push_str(&format!(
            "\n{}\n",
            format_description("Run 'sysvol <category> help' for arguments and examples.")
        ));
        out
    }

    /// Detailed help for one category, including arguments and examples
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the category does not exist
    pub fn category_help(&self, category: &str) -> Result<String, CliError> {
        let commands = self.registry.category_metadata(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let mut out = format!("{}\n", format_header(category));

        for metadata in commands {
            let usage = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            out.push_str(&format!(
                "\n  {} {}\n    {}\n",
                format_command(&metadata.name),
                usage,
                format_description(&metadata.description)
            ));

            for arg in &metadata.args {
                out.push_str(&format!(
                    "    {} ({}): {}\n",
                    arg.name,
                    arg.value_type.hint(),
                    arg.description
                ));
            }

            for example in &metadata.examples {
                out.push_str(&format!("    {}\n", format_usage(example)));
            }
        }

        Ok(out)
    }
}
