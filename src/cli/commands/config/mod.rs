//! Configuration inspection commands.
mod get;
mod path;
mod schema;
mod show;

pub use get::GetCommand;
pub use path::PathCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all configuration-related commands with the command registry.
///
/// Registers commands in the "config" category for inspecting the
/// effective configuration and its schema.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PathCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
