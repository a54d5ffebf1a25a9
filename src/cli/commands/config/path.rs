use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command printing where the configuration was loaded from
pub struct PathCommand {
    services: Services,
}

impl PathCommand {
    /// Creates a new PathCommand
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for PathCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(self.services.config_path.display().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "path".to_string(),
            description: "Print the configuration file path".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["sysvol config path".to_string()],
        }
    }
}
