//! Issuelint: structural linter for GitHub issue templates.
//!
//! This is the main entry point for the `issuelint` CLI. It parses arguments,
//! runs the validation over the template directory, and turns the outcome
//! into a process exit code.

mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod template;
mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    match commands::run(&cli.dir) {
        Ok(summary) => ExitCode::from(summary.exit_code() as u8),
        Err(err) => {
            // Fatal errors are part of the CI log, so they go to stdout too
            println!("❌ {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("issuelint=warn"),
        1 => EnvFilter::new("issuelint=info"),
        _ => EnvFilter::new("issuelint=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
