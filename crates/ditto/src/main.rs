//! ditto command line entry point.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use ditto_core::fs::OsFileSystem;
use ditto_core::{DittoError, RenderReport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const CLI_BANNER: &str = r"
 ____   __   ____  ____   __
(    \ (  ) (_  _)(_  _) /  \
 ) D (  )(    )(    )(  (  O )
(____/ (__)  (__)  (__)  \__/
";

fn main() -> ExitCode {
    init_tracing();
    info!("{CLI_BANNER}");

    info!("Parsing cli args...");
    let cli = Cli::parse();

    info!("Starting.");
    match execute(cli) {
        Ok(report) => {
            info!(
                written = report.written.len(),
                skipped = report.skipped.len(),
                "Finished."
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.exit_code();
            error!("{:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}

fn execute(cli: Cli) -> Result<RenderReport, DittoError> {
    let config = cli.into_config()?;
    ditto_core::run(&OsFileSystem, &config)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}
