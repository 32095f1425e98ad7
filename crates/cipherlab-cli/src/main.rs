//! Cipherlab CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use cipherlab::CipherlabError;
use cipherlab_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);

    info!(command:? = args.command; "Starting Cipherlab");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = cipherlab_cli::run(&args) {
        error!("{}", render(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Sets up `env_logger`, falling back to `warn` on an unknown level.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

/// Renders `err` as a miette report, or its plain message if rendering fails.
fn render(err: &CipherlabError) -> String {
    let mut report = String::new();
    match GraphicalReportHandler::new().render_report(&mut report, &ErrorAdapter(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}
