use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command printing the effective configuration, defaults filled in
pub struct ShowCommand {
    services: Services,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(self.services.config.to_toml_string()?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration as TOML".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["sysvol config show".to_string()],
        }
    }
}
