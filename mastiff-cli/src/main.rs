//! CLI entry point for computing a minimum spanning forest with MASTIFF.
//!
//! Parses arguments with clap, runs the engine, renders a summary to
//! stdout, and maps errors to a nonzero exit code. Logging is initialised
//! eagerly so the rest of the run can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use mastiff_cli::cli::{render_summary, run_cli, Cli};
use mastiff_cli::logging::{self, LoggingError};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command execution failed");
            eprintln!("mastiff: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), mastiff_cli::cli::CliError> {
    let cli = Cli::parse();
    let summary = run_cli(cli)?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).expect("writing to stdout must not fail");
    writer.flush().expect("flushing stdout must not fail");
    Ok(())
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
