use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command to print the current volume
///
/// Prints the bare percentage so scripts can consume it.
pub struct GetCommand {
    services: Services,
}

impl GetCommand {
    /// Creates a new GetCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for GetCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let sink = self.services.target_sink()?;
        let volume = self.services.volume.volume(sink)?;

        Ok(volume.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Print the current volume in percent".to_string(),
            category: "volume".to_string(),
            args: vec![],
            examples: vec!["sysvol volume get".to_string()],
        }
    }
}
