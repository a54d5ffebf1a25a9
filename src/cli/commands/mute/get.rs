use crate::{
    cli::{Command, CommandResult, formatting::format_muted, types::CommandMetadata},
    service_manager::Services,
};

/// Command to print whether the output is muted
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
        let muted = self.services.volume.is_muted(sink)?;

        Ok(format_muted(muted).to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Print 'yes' if the output is muted, 'no' otherwise".to_string(),
            category: "mute".to_string(),
            args: vec![],
            examples: vec!["sysvol mute get".to_string()],
        }
    }
}
