//! CLI entry point for the fiedler graph engine.
//!
//! Parses command-line arguments with clap, runs either an interactive
//! session or a one-shot pipeline, and maps failures to exit codes. Logging
//! is initialised first so every later step can emit structured diagnostics
//! via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use fiedler_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, and flush the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_cli(cli, stdin.lock(), &mut writer).context("failed to execute command")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let engine_error = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Engine(engine) => Some(engine),
                _ => None,
            });

        let code_field = engine_error.map(|engine| field::display(engine.code().as_str()));
        let kind_field = engine_error.map(|engine| field::display(engine.kind().as_str()));

        error!(
            error = %err,
            code = code_field,
            kind = kind_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
