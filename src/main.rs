// src/main.rs

use std::process::ExitCode;

use pct_launcher::{LaunchStatus, cli, logging, run};

fn main() -> ExitCode {
    match run_main() {
        Ok(LaunchStatus::Started | LaunchStatus::DryRun) => ExitCode::SUCCESS,
        Ok(LaunchStatus::Failed) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("pct-launcher error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run_main() -> anyhow::Result<LaunchStatus> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
