//! propbot-setup: prepares a checkout to run propbot (toolchain check, log directory,
//! `.env` template, dependency fetch).

use std::process::ExitCode;

use anyhow::{Context, Result};
use propbot_cli::error::EXIT_FAILURE;
use propbot_cli::SetupRunner;
use propbot_core::{init_tracing, LogTarget};

fn main() -> ExitCode {
    match run() {
        Ok(steps) => {
            println!("Setup complete ({} steps).", steps);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run() -> Result<usize> {
    let root = std::env::current_dir().context("resolve working directory")?;
    if let Err(e) = init_tracing(
        &root.join("logs/setup.log").to_string_lossy(),
        LogTarget::FileAndStdout,
    ) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let runner = SetupRunner::default_plan(&root);
    Ok(runner.run()?)
}
