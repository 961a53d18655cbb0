//! Output formatting for the CLI.
//!
//! Diagnostics are printed one per line as
//! `<line>: <severity>: <message>[: '<text>']`, the format automation
//! around the linter relies on. Colors only touch the severity label.

use colored::Colorize;
use psl_lint_core::validate::{Diagnostic, LintReport, Severity};
use std::io::Write;

/// Usage text printed when no input is given.
pub fn usage(program: &str) -> String {
    format!("usage: {program} PSLfile\nor     {program} -        # To read PSL from STDIN\n")
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a single diagnostic and its detail lines.
    pub fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> std::io::Result<()> {
        let severity = diagnostic.severity().to_string();
        let severity = if self.use_colors {
            match diagnostic.severity() {
                Severity::Error => severity.red().bold().to_string(),
                Severity::Warning => severity.yellow().bold().to_string(),
            }
        } else {
            severity
        };

        writeln!(
            self.writer,
            "{}: {}: {}",
            diagnostic.line,
            severity,
            diagnostic.message()
        )?;

        for detail in diagnostic.detail_lines() {
            writeln!(self.writer, "{}", detail)?;
        }

        Ok(())
    }

    /// Writes every diagnostic of a report in the order they were raised.
    pub fn write_report(&mut self, report: &LintReport) -> std::io::Result<()> {
        for diagnostic in &report.diagnostics {
            self.write_diagnostic(diagnostic)?;
        }
        self.writer.flush()
    }

    /// Writes the usage text.
    pub fn write_usage(&mut self, program: &str) -> std::io::Result<()> {
        write!(self.writer, "{}", usage(program))
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
