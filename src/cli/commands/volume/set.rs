use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, parse_number_arg},
    },
    service_manager::Services,
};

/// Command to set an absolute volume
pub struct SetCommand {
    services: Services,
}

impl SetCommand {
    /// Creates a new SetCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for SetCommand {
    /// Sets the volume of the target sink
    ///
    /// # Arguments
    ///
    /// * `args` - [level]
    ///
    /// # Errors
    ///
    /// Returns CliError if:
    /// - The level is not a number
    /// - The level is outside 0-100 (checked before the mixer is touched)
    /// - The mixer command fails
    fn execute(&self, args: &[String]) -> CommandResult {
        let arg = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <level> argument".to_string())
        })?;
        let level = parse_number_arg("level", arg)?;

        let sink = self.services.target_sink()?;
        self.services.volume.set_volume(sink, level)?;

        Ok(format!("Set volume to {level}%"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set the volume to an absolute level".to_string(),
            category: "volume".to_string(),
            args: vec![CommandArg {
                name: "level".to_string(),
                description: "Volume level (0 to 100)".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "sysvol volume set 50".to_string(),
                "sysvol volume set 0".to_string(),
            ],
        }
    }
}
