use crate::{
    cli::{Command, CommandResult, formatting::format_muted, types::CommandMetadata},
    service_manager::Services,
};

/// Command to print backend, sink, volume and mute state on one line
pub struct StatusCommand {
    services: Services,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for StatusCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let volume_service = &self.services.volume;
        let sink = self.services.target_sink()?;
        let volume = volume_service.volume(sink)?;
        let muted = volume_service.is_muted(sink)?;

        Ok(format!(
            "backend={} sink={sink} volume={volume}% muted={}",
            volume_service.backend_kind(),
            format_muted(muted)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Print backend, sink, volume and mute state".to_string(),
            category: "sink".to_string(),
            args: vec![],
            examples: vec!["sysvol sink status".to_string()],
        }
    }
}
