//! sysvol command-line entry point

use std::{error::Error, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use sysvol::{
    cli::{CliService, formatting::format_error},
    config::{BackendPreference, Config, ConfigPaths},
    service_manager::Services,
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sysvol", version)]
#[command(about = "Query and control system volume through pactl or amixer")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Configuration file to use instead of the XDG default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Mixer backend, overriding `audio.backend`
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// Command category (volume, mute, sink, config, help)
    category: Option<String>,

    /// Command within the category
    command: Option<String>,

    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Auto,
    Pactl,
    Amixer,
}

impl From<BackendArg> for BackendPreference {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => BackendPreference::Auto,
            BackendArg::Pactl => BackendPreference::Pactl,
            BackendArg::Amixer => BackendPreference::Amixer,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

/// Loads configuration, wires up services and runs one command.
///
/// # Errors
/// Returns error if the configuration cannot be loaded or the command fails.
fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let config_path = match cli.config {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };
    let config = Config::load(&config_path)?;

    tracing_config::init(config.general.log_level)?;
    debug!(path = %config_path.display(), "loaded configuration");

    let backend_override = cli.backend.map(BackendPreference::from);

    let services = Services::new(config, config_path, backend_override);
    let cli_service = CliService::new(&services);

    let category = cli.category.as_deref().unwrap_or("help");
    let command = cli.command.as_deref().unwrap_or("");

    Ok(cli_service.execute_command(category, command, &cli.args)?)
}
