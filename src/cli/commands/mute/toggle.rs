use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command to flip the mute state
pub struct ToggleCommand {
    services: Services,
}

impl ToggleCommand {
    /// Creates a new ToggleCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let sink = self.services.target_sink()?;
        let muted = self.services.volume.toggle_mute(sink)?;

        Ok(if muted { "Muted" } else { "Unmuted" }.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "toggle".to_string(),
            description: "Mute if unmuted, unmute if muted".to_string(),
            category: "mute".to_string(),
            args: vec![],
            examples: vec!["sysvol mute toggle".to_string()],
        }
    }
}
