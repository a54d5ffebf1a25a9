//! Default sink commands.
mod get;
mod status;

pub use get::GetCommand;
pub use status::StatusCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all sink commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "sink";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(services.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StatusCommand::new(services.clone())),
    );
}
