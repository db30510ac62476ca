//! Entry point for the `kruskal` binary.
//!
//! Initialises logging, runs one interactive session against stdout and maps
//! failures to a non-zero exit code. The transcript already tells the user
//! what went wrong; the error is also logged with its stable code.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kruskal_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run_cli(cli, &mut output).context("session failed")?;
    output.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.map(|cli_error| field::display(cli_error.code()));
        let mst_code = cli_error
            .and_then(CliError::mst_code)
            .map(|code| field::display(code.as_str()));
        let chain = format!("{err:#}");
        error!(error = %chain, code, mst_code, "kruskal failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available when its initialisation failed"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
