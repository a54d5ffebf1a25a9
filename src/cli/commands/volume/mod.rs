//! Volume level commands.
mod adjust;
mod get;
mod set;
mod step;

pub use adjust::AdjustCommand;
pub use get::GetCommand;
pub use set::SetCommand;
pub use step::{Direction, StepCommand};

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all volume commands with the command registry
///
/// Registers commands in the "volume" category for reading and changing
/// the output volume.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "volume";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(services.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(AdjustCommand::new(services.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StepCommand::new(services.clone(), Direction::Up)),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StepCommand::new(services.clone(), Direction::Down)),
    );
}
