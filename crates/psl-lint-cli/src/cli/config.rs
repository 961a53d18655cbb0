//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration
//! types and opens the input the linter reads from.

use crate::cli::Args;
use psl_lint_core::validate::{GroupCheck, LintConfig, LintReport};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No input argument was given.
    #[error("missing input argument")]
    MissingInput,

    /// The input file could not be opened.
    #[error("failed to open '{path}': {source}")]
    OpenInput {
        /// The path that was given.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// No errors were found. Warnings may have been reported.
    Success,
    /// At least one error was found.
    ValidationFailed,
    /// No input was given; usage was printed.
    Usage,
    /// The input could not be opened or read.
    InputFailure,
}

impl ExitCode {
    /// The process exit status for this code.
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::ValidationFailed | ExitCode::Usage => 1,
            ExitCode::InputFailure => 2,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        i32::from(code.code())
    }
}

/// Where the PSL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Interprets the positional argument.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Opens the input for line-wise reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, ConfigError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| ConfigError::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// A short description for logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Validated and processed configuration for running the linter.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where to read the PSL from.
    pub input: InputSource,
    /// Configuration for the lint run.
    pub lint_config: LintConfig,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let input = args
            .input
            .as_deref()
            .map(InputSource::from_arg)
            .ok_or(ConfigError::MissingInput)?;

        let group_check = if args.check_group_order {
            GroupCheck::OnBoundaries
        } else {
            GroupCheck::Dormant
        };

        let lint_config = LintConfig::new()
            .with_group_check(group_check)
            .with_wildcard_exception_pairs(args.allow_wildcard_exception);

        Ok(Self { input, lint_config })
    }

    /// Determines the exit code from a finished report.
    ///
    /// Only errors fail the run.
    pub fn exit_code_for_report(&self, report: &LintReport) -> ExitCode {
        if report.has_errors() {
            ExitCode::ValidationFailed
        } else {
            ExitCode::Success
        }
    }
}
