//! Mute state commands.
mod get;
mod switch;
mod toggle;

pub use get::GetCommand;
pub use switch::SwitchCommand;
pub use toggle::ToggleCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all mute commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "mute";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(services.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SwitchCommand::new(services.clone(), true)),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SwitchCommand::new(services.clone(), false)),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ToggleCommand::new(services.clone())),
    );
}
