use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command to print the default sink id as reported by `pacmd`
///
/// Always runs discovery, ignoring `audio.sink`.
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
        let sink = self.services.volume.resolve_sink()?;
        Ok(sink.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Print the default sink id".to_string(),
            category: "sink".to_string(),
            args: vec![],
            examples: vec!["sysvol sink get".to_string()],
        }
    }
}
