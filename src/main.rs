// SPDX-License-Identifier: GPL-3.0-only

use camtest::benchmark::BenchmarkOutcome;
use camtest::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camtest=trace, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    let args = cli::parse_or_exit();

    let result = cli::run(&args);
    match &result {
        Ok(BenchmarkOutcome::Completed(_)) => {}
        Ok(BenchmarkOutcome::Failed { .. }) => {
            // Partial interval reports are already on stdout
            eprintln!("Frame capture failed.");
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Startup failed");
            eprintln!("{}", err);
        }
    }

    ExitCode::from(cli::exit_code(&result))
}
