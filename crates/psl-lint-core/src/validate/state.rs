//! The per-line lint state machine.
//!
//! [`LintState`] owns everything one run needs: the line counter, the
//! section tracker, the pending group, the duplicate table and the report.
//! Lines are fed in file order; every finding is recorded and the run
//! always continues to the end of the input.

use super::config::{GroupCheck, LintConfig};
use super::duplicates::DuplicateDetector;
use super::error::{Diagnostic, LintError, LintIssue, LintReport, Severity};
use super::labels::{check_label, is_lowercase};
use super::order::{GroupBuffer, ReversedLabels};
use super::section::SectionTracker;
use crate::parse::{
    Line, LineKind, Rule, RuleKind, Section, split_carriage_returns, split_lines, split_prefixes,
};
use log::{debug, info, trace};
use std::io::{self, BufRead};

/// State of a single lint run.
#[derive(Debug, Clone)]
pub struct LintState {
    config: LintConfig,
    line_number: usize,
    sections: SectionTracker,
    group: GroupBuffer,
    duplicates: DuplicateDetector,
    report: LintReport,
}

impl Default for LintState {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl LintState {
    /// Creates the state for a new run.
    pub fn new(config: LintConfig) -> Self {
        let duplicates = DuplicateDetector::new()
            .with_wildcard_exception_pairs(config.allow_wildcard_exception_pairs);
        Self {
            config,
            line_number: 0,
            sections: SectionTracker::new(),
            group: GroupBuffer::new(),
            duplicates,
            report: LintReport::new(),
        }
    }

    /// Number of lines processed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The section currently open.
    pub fn section(&self) -> Section {
        self.sections.current()
    }

    /// Rules collected since the last group close.
    pub fn pending_group(&self) -> &[ReversedLabels] {
        self.group.pending()
    }

    /// Diagnostics recorded so far.
    pub fn report(&self) -> &LintReport {
        &self.report
    }

    /// Processes the next line of input.
    pub fn process_line(&mut self, raw: &str) {
        self.line_number += 1;
        let line = Line::new(self.line_number, raw);
        trace!("{}: {:?}", line.number, line.text);

        if line.has_surrounding_whitespace() {
            self.emit(LintIssue::SurroundingWhitespace, line.raw);
        }

        match line.kind() {
            LineKind::Blank => self.close_group(""),
            LineKind::Comment(comment) => {
                self.close_group(comment);
                if let Err(issue) = self.sections.on_comment(comment) {
                    self.emit(issue, comment);
                }
            }
            LineKind::Rule(text) => self.process_rule(text),
        }
    }

    /// Ends the run and returns its report.
    pub fn finish(self) -> LintReport {
        info!(
            "Linted {} line(s) with {} distinct rule(s): {} error(s), {} warning(s)",
            self.line_number,
            self.duplicates.distinct_names(),
            self.report.error_count(),
            self.report.warning_count()
        );
        self.report
    }

    fn process_rule(&mut self, text: &str) {
        let prefixes = split_prefixes(text);
        let kind = RuleKind::from_prefixes(prefixes.wildcard, prefixes.exception);
        let rule = Rule::new(
            prefixes.body,
            kind.unwrap_or(RuleKind::Wildcard),
            self.sections.current(),
        );

        if !rule.section.is_open() {
            self.emit_for_rule(LintIssue::RuleOutsideSection, text);
        }

        // Casing is checked on the full line, prefixes included
        if !is_lowercase(text) {
            self.emit_for_rule(LintIssue::NotLowercase, text);
        }

        if kind.is_err() {
            self.emit_for_rule(LintIssue::WildcardWithException, rule.body);
        }

        self.group.push(rule.reversed_labels());

        for label in &rule.labels {
            if let Some(issue) = check_label(label) {
                self.emit_for_rule(issue, rule.body);
            }
        }

        if let Some(issue) = self.duplicates.observe(rule.body, self.line_number, rule.kind) {
            self.emit_for_rule(issue, rule.body);
        }
    }

    fn close_group(&mut self, text: &str) {
        if self.config.group_check != GroupCheck::OnBoundaries {
            return;
        }

        let closed = self.group.close();
        debug!(
            "{}: closed group of {} rule(s){}",
            self.line_number,
            closed.entries.len(),
            if closed.skipped { " without check" } else { "" }
        );

        if let Some(issue) = closed.issue {
            self.emit(issue, text);
        }
    }

    fn emit_for_rule(&mut self, issue: LintIssue, text: &str) {
        if self.config.group_check == GroupCheck::OnBoundaries
            && issue.severity() == Severity::Error
        {
            self.group.skip_next();
        }
        self.emit(issue, text);
    }

    fn emit(&mut self, issue: LintIssue, text: &str) {
        debug!(
            "{}: {:?} {}: {}",
            self.line_number,
            issue.category(),
            issue.severity(),
            issue
        );
        self.report.report(Diagnostic::new(self.line_number, issue, text));
    }
}

/// Lints PSL content held in memory.
pub fn lint_str(input: &str, config: &LintConfig) -> LintReport {
    let mut state = LintState::new(config.clone());
    for line in split_lines(input) {
        state.process_line(line);
    }
    state.finish()
}

/// Lints PSL content from a reader, one line at a time.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Read failures (including
/// invalid UTF-8) abort the run.
pub fn lint_reader<R: BufRead>(reader: R, config: &LintConfig) -> Result<LintReport, LintError> {
    let mut state = LintState::new(config.clone());
    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(|source| LintError::Io {
            line: state.line_number() + 1,
            source,
        })?;
        let chunk = String::from_utf8(chunk).map_err(|e| LintError::Io {
            line: state.line_number() + 1,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        for line in split_carriage_returns(&chunk) {
            state.process_line(line);
        }
    }
    Ok(state.finish())
}
