use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Command to mute (`on`) or unmute (`off`) the output
///
/// Success means the mixer tool exited cleanly; nothing is read back.
pub struct SwitchCommand {
    services: Services,
    mute: bool,
}

impl SwitchCommand {
    /// Creates a new SwitchCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    /// * `mute` - `true` for the `on` command, `false` for `off`
    pub fn new(services: Services, mute: bool) -> Self {
        Self { services, mute }
    }
}

impl Command for SwitchCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let sink = self.services.target_sink()?;

        if self.mute {
            self.services.volume.mute(sink)?;
            Ok("Muted".to_string())
        } else {
            self.services.volume.unmute(sink)?;
            Ok("Unmuted".to_string())
        }
    }

    fn metadata(&self) -> CommandMetadata {
        let (name, description) = if self.mute {
            ("on", "Mute the output")
        } else {
            ("off", "Unmute the output")
        };

        CommandMetadata {
            name: name.to_string(),
            description: description.to_string(),
            category: "mute".to_string(),
            args: vec![],
            examples: vec![format!("sysvol mute {name}")],
        }
    }
}
