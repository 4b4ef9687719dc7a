pub mod cli;
pub mod commands;
pub mod config;
pub mod telemetry;

use cli::{Cli, Commands};
use commands::Report;
use config::InspectorConfig;

pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let config = InspectorConfig::new_for_args(&cli.global)?;
    match &cli.command {
        Commands::Account(args) => commands::account::account(&config, args),
        Commands::Event(args) => commands::event::event(&config, args),
        Commands::Validate(args) => commands::validate::validate(&config, args),
    }
}
