//! PSL Lint CLI
//!
//! A command-line tool for checking Public Suffix List files.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ConfigError, ExitCode, ValidatedConfig};
use cli::output::HumanOutput;
use psl_lint_core::lint_reader;

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    let use_colors = args.color.use_colors(io::stdout().is_terminal());
    let exit_code = run(&args, io::stdout().lock(), io::stderr().lock(), use_colors);

    StdExitCode::from(exit_code.code())
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Run the linter with the given arguments.
fn run<O: Write, E: Write>(args: &Args, stdout: O, stderr: E, use_colors: bool) -> ExitCode {
    let mut output = HumanOutput::new(stdout, use_colors);
    let mut errors = HumanOutput::new(stderr, use_colors);

    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(ConfigError::MissingInput) => {
            let _ = output.write_usage("pslint");
            return ExitCode::Usage;
        }
        Err(e) => {
            let _ = errors.write_error(&e.to_string());
            return ExitCode::InputFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Linting {}", config.input.describe());

    let reader = match config.input.open() {
        Ok(reader) => reader,
        Err(e) => {
            let _ = errors.write_error(&e.to_string());
            return ExitCode::InputFailure;
        }
    };

    let report = match lint_reader(reader, &config.lint_config) {
        Ok(report) => report,
        Err(e) => {
            let _ = errors.write_error(&e.to_string());
            return ExitCode::InputFailure;
        }
    };

    if let Err(e) = output.write_report(&report) {
        error!("Failed to write output: {}", e);
        return ExitCode::InputFailure;
    }

    info!(
        "Found {} error(s) and {} warning(s)",
        report.error_count(),
        report.warning_count()
    );

    config.exit_code_for_report(&report)
}
