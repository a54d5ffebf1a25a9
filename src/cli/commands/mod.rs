/// Configuration inspection commands
pub mod config;
/// Mute state commands
pub mod mute;
/// Default sink commands
pub mod sink;
/// Volume level commands
pub mod volume;
