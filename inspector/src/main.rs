use std::process::ExitCode;

use clap::Parser;
use uniforge_inspector::{cli::Cli, run, telemetry::setup_telemetry};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = setup_telemetry(cli.global.log_dir.as_deref());

    let report = run(&cli)?;
    println!("{}", report.text);
    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
