use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, parse_number_arg},
    },
    service_manager::Services,
};

/// Which way a step command moves the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Louder
    Up,
    /// Quieter
    Down,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Command to move the volume by the configured step
///
/// Registered twice, as `up` and `down`. An explicit amount overrides
/// `audio.step`.
pub struct StepCommand {
    services: Services,
    direction: Direction,
}

impl StepCommand {
    /// Creates a new StepCommand
    ///
    /// # Arguments
    ///
    /// * `services` - Shared application services
    /// * `direction` - Whether this is the `up` or the `down` command
    pub fn new(services: Services, direction: Direction) -> Self {
        Self {
            services,
            direction,
        }
    }
}

impl Command for StepCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let amount = match args.first() {
            Some(arg) => parse_number_arg("amount", arg)?,
            None => self.services.config.audio.step_delta(),
        };

        if amount < 0 {
            return Err(CliError::InvalidArguments(format!(
                "'amount' must not be negative, use 'volume {}' instead",
                match self.direction {
                    Direction::Up => "down",
                    Direction::Down => "up",
                }
            )));
        }

        let delta = match self.direction {
            Direction::Up => amount,
            Direction::Down => -amount,
        };

        let sink = self.services.target_sink()?;
        self.services.volume.adjust_volume(sink, delta)?;

        Ok(format!("Adjusted volume by {delta:+}%"))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.direction.name();
        let verb = match self.direction {
            Direction::Up => "Raise",
            Direction::Down => "Lower",
        };

        CommandMetadata {
            name: name.to_string(),
            description: format!("{verb} the volume by the configured step"),
            category: "volume".to_string(),
            args: vec![CommandArg {
                name: "amount".to_string(),
                description: "Percentage to use instead of audio.step".to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                format!("sysvol volume {name}"),
                format!("sysvol volume {name} 10"),
            ],
        }
    }
}
