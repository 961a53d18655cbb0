//! CLI module for the PSL linter.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support for the lint options.

pub mod config;
pub mod output;

use clap::{Parser, ValueEnum};

/// Public Suffix List linter - checks a PSL file for syntax and style issues.
///
/// Prints one line per finding and exits non-zero if any error was found.
/// Warnings alone do not fail the run.
#[derive(Parser, Debug)]
#[command(name = "pslint")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// PSL file to check, or '-' to read from standard input.
    pub input: Option<String>,

    /// Check that groups of rules are sorted and share their TLD.
    /// Groups end at blank lines and comment lines.
    #[arg(long, env = "PSLINT_CHECK_GROUP_ORDER")]
    pub check_group_order: bool,

    /// Allow a wildcard and an exception rule for the same name
    /// (e.g. '*.foo.bar' together with '!foo.bar').
    #[arg(long, env = "PSLINT_ALLOW_WILDCARD_EXCEPTION")]
    pub allow_wildcard_exception: bool,

    /// When to colorize severity labels.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colorize when standard output is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether output goes to a terminal.
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
