use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, parse_number_arg},
    },
    service_manager::Services,
};

/// Command to change the volume by a signed amount
///
/// The amount is not range checked; the mixer clamps the result.
pub struct AdjustCommand {
    services: Services,
}

impl AdjustCommand {
    /// Creates a new AdjustCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

impl Command for AdjustCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let arg = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <delta> argument".to_string())
        })?;
        let delta = parse_number_arg("delta", arg)?;

        let sink = self.services.target_sink()?;
        self.services.volume.adjust_volume(sink, delta)?;

        Ok(format!("Adjusted volume by {delta:+}%"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "adjust".to_string(),
            description: "Raise or lower the volume by a signed percentage".to_string(),
            category: "volume".to_string(),
            args: vec![CommandArg {
                name: "delta".to_string(),
                description: "Percentage to add, negative to lower".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "sysvol volume adjust 10".to_string(),
                "sysvol volume adjust -5".to_string(),
            ],
        }
    }
}
