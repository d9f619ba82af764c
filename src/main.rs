use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use sumador::{Cli, handlers::run_sum, watchdog};

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // The deadline covers the whole run, including a blocking stdin read.
    watchdog::arm(Duration::from_secs(cli.timeout));

    run_sum(&cli).into()
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Diagnostics go to stderr; stdout carries only the program's own lines.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
