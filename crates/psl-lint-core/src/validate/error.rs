//! Issue and diagnostic types for PSL linting.
//!
//! Lint findings are plain data: a [`LintIssue`] says what is wrong, a
//! [`Diagnostic`] places it on a line, and a [`LintReport`] collects all
//! diagnostics of a run together with the warning and error counters.

use super::order::format_group;
use crate::parse::Section;
use std::fmt;
use thiserror::Error;

/// The severity of a lint issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A style problem; does not fail the run.
    Warning,
    /// A problem that fails the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Broad classification of lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Section tracking problems.
    Structural,
    /// Malformed rules and labels.
    Syntactic,
    /// Rules that conflict with other rules.
    Semantic,
    /// Formatting problems.
    Stylistic,
}

/// A problem found in a PSL file.
///
/// The display text of each variant is the message printed to users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintIssue {
    /// The line has leading or trailing whitespace.
    #[error("Leading/Trailing whitespace")]
    SurroundingWhitespace,

    /// A begin marker for a section name that is not known.
    #[error("Unexpected begin of unknown section")]
    UnknownSectionBegin,

    /// An end marker while no section is open.
    #[error("End of section without previous begin")]
    EndWithoutBegin,

    /// A begin marker while another section is still open.
    #[error("Unexpected begin of section")]
    UnexpectedSectionBegin {
        /// The section that is open.
        open: Section,
    },

    /// An end marker that does not close the open section.
    #[error("Unexpected end of section")]
    UnexpectedSectionEnd {
        /// The section that is open.
        open: Section,
    },

    /// A rule line while no section is open.
    #[error("Rule outside of section")]
    RuleOutsideSection,

    /// The rule contains uppercase or titlecase characters.
    #[error("Rule must be lowercase")]
    NotLowercase,

    /// The rule is both a wildcard and an exception.
    #[error("Combination of wildcard and exception")]
    WildcardWithException,

    /// An empty label from a leading, trailing or doubled dot.
    #[error("Leading/trailing or multiple dot")]
    EmptyLabel,

    /// A label in punycode (`xn--`) form.
    #[error("Punycode found")]
    Punycode {
        /// The offending label.
        label: String,
    },

    /// A label containing `--`.
    #[error("Double minus found")]
    DoubleMinus {
        /// The offending label.
        label: String,
    },

    /// A label with an ASCII character other than letters, digits and `-`.
    #[error("Illegal character")]
    IllegalCharacter {
        /// The offending label.
        label: String,
        /// The first illegal character.
        character: char,
    },

    /// The bare rule name was already seen on an earlier line.
    #[error("Found doublette/ambiguity (previous line was {first_line})")]
    Duplicate {
        /// The line of the first occurrence.
        first_line: usize,
    },

    /// Rules of one group do not share their top-level label.
    #[error("Domain group TLD is not consistent")]
    InconsistentGroupTld {
        /// The top-level label of the group's first rule.
        expected: String,
        /// The first differing top-level label.
        found: String,
    },

    /// Rules of one group are not in canonical order.
    #[error("Incorrectly sorted group of domains")]
    UnsortedGroup {
        /// Reversed labels in file order.
        original: Vec<Vec<String>>,
        /// Reversed labels in canonical order.
        sorted: Vec<Vec<String>>,
    },
}

impl LintIssue {
    /// Creates a duplicate rule issue.
    pub fn duplicate(first_line: usize) -> Self {
        Self::Duplicate { first_line }
    }

    /// Creates an illegal character issue.
    pub fn illegal_character(label: impl Into<String>, character: char) -> Self {
        Self::IllegalCharacter {
            label: label.into(),
            character,
        }
    }

    /// Returns the severity of this issue.
    pub fn severity(&self) -> Severity {
        match self {
            LintIssue::SurroundingWhitespace | LintIssue::UnsortedGroup { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Returns the category of this issue.
    pub fn category(&self) -> Category {
        match self {
            LintIssue::UnknownSectionBegin
            | LintIssue::EndWithoutBegin
            | LintIssue::UnexpectedSectionBegin { .. }
            | LintIssue::UnexpectedSectionEnd { .. }
            | LintIssue::RuleOutsideSection => Category::Structural,
            LintIssue::NotLowercase
            | LintIssue::WildcardWithException
            | LintIssue::EmptyLabel
            | LintIssue::Punycode { .. }
            | LintIssue::DoubleMinus { .. }
            | LintIssue::IllegalCharacter { .. } => Category::Syntactic,
            LintIssue::Duplicate { .. } | LintIssue::InconsistentGroupTld { .. } => {
                Category::Semantic
            }
            LintIssue::SurroundingWhitespace | LintIssue::UnsortedGroup { .. } => {
                Category::Stylistic
            }
        }
    }
}

/// A lint issue placed on a line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number (1-based).
    pub line: usize,
    /// What is wrong.
    pub issue: LintIssue,
    /// The line's text as it was being checked, if not empty.
    pub text: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic, dropping empty line text.
    pub fn new(line: usize, issue: LintIssue, text: &str) -> Self {
        Self {
            line,
            issue,
            text: (!text.is_empty()).then(|| text.to_string()),
        }
    }

    /// Returns the severity of the underlying issue.
    pub fn severity(&self) -> Severity {
        self.issue.severity()
    }

    /// The message without line number and severity.
    pub fn message(&self) -> String {
        match &self.text {
            Some(text) => format!("{}: '{}'", self.issue, text),
            None => self.issue.to_string(),
        }
    }

    /// Extra lines printed below the diagnostic.
    ///
    /// Only unsorted groups have them: the group as found and as expected.
    pub fn detail_lines(&self) -> Vec<String> {
        match &self.issue {
            LintIssue::UnsortedGroup { original, sorted } => {
                vec![
                    format!("  {}", format_group(original)),
                    format!("  {}", format_group(sorted)),
                ]
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.line, self.severity(), self.message())
    }
}

/// All diagnostics of one lint run.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    /// Diagnostics in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    warnings: usize,
    errors: usize,
}

impl LintReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and bumps the counter for its severity.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Records a warning-level issue.
    pub fn warning(&mut self, line: usize, issue: LintIssue, text: &str) {
        debug_assert_eq!(issue.severity(), Severity::Warning);
        self.report(Diagnostic::new(line, issue, text));
    }

    /// Records an error-level issue.
    pub fn error(&mut self, line: usize, issue: LintIssue, text: &str) {
        debug_assert_eq!(issue.severity(), Severity::Error);
        self.report(Diagnostic::new(line, issue, text));
    }

    /// Number of warnings raised.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Number of errors raised.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Returns true if no error was raised. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }

    /// Returns true if at least one error was raised.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// A failure that stops a lint run before it completes.
#[derive(Debug, Error)]
pub enum LintError {
    /// Reading the input failed.
    #[error("failed to read input at line {line}: {source}")]
    Io {
        /// The line that could not be read (1-based).
        line: usize,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_and_order() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn issue_severities() {
        assert_eq!(LintIssue::SurroundingWhitespace.severity(), Severity::Warning);
        assert_eq!(
            LintIssue::UnsortedGroup {
                original: vec![],
                sorted: vec![]
            }
            .severity(),
            Severity::Warning
        );
        assert_eq!(LintIssue::NotLowercase.severity(), Severity::Error);
        assert_eq!(LintIssue::duplicate(3).severity(), Severity::Error);
    }

    #[test]
    fn issue_categories() {
        assert_eq!(LintIssue::RuleOutsideSection.category(), Category::Structural);
        assert_eq!(
            LintIssue::UnexpectedSectionEnd {
                open: Section::Icann
            }
            .category(),
            Category::Structural
        );
        assert_eq!(LintIssue::EmptyLabel.category(), Category::Syntactic);
        assert_eq!(LintIssue::duplicate(1).category(), Category::Semantic);
        assert_eq!(
            LintIssue::SurroundingWhitespace.category(),
            Category::Stylistic
        );
    }

    #[test]
    fn duplicate_message_cites_first_line() {
        assert_eq!(
            LintIssue::duplicate(12).to_string(),
            "Found doublette/ambiguity (previous line was 12)"
        );
    }

    #[test]
    fn diagnostic_with_text() {
        let diagnostic = Diagnostic::new(2, LintIssue::NotLowercase, "Foo.com");
        assert_eq!(
            diagnostic.to_string(),
            "2: error: Rule must be lowercase: 'Foo.com'"
        );
    }

    #[test]
    fn diagnostic_without_text() {
        let diagnostic = Diagnostic::new(7, LintIssue::SurroundingWhitespace, "");
        assert_eq!(diagnostic.text, None);
        assert_eq!(diagnostic.to_string(), "7: warning: Leading/Trailing whitespace");
    }

    #[test]
    fn unsorted_group_details() {
        let diagnostic = Diagnostic::new(
            5,
            LintIssue::UnsortedGroup {
                original: vec![
                    vec!["com".to_string(), "b".to_string()],
                    vec!["com".to_string(), "a".to_string()],
                ],
                sorted: vec![
                    vec!["com".to_string(), "a".to_string()],
                    vec!["com".to_string(), "b".to_string()],
                ],
            },
            "",
        );
        assert_eq!(
            diagnostic.detail_lines(),
            vec![
                "  [['com', 'b'], ['com', 'a']]".to_string(),
                "  [['com', 'a'], ['com', 'b']]".to_string(),
            ]
        );
        assert!(Diagnostic::new(1, LintIssue::EmptyLabel, "a..b")
            .detail_lines()
            .is_empty());
    }

    #[test]
    fn report_counters() {
        let mut report = LintReport::new();
        assert!(report.is_ok());

        report.warning(1, LintIssue::SurroundingWhitespace, " a.b");
        assert!(report.is_ok());
        assert!(!report.has_errors());

        report.error(2, LintIssue::RuleOutsideSection, "a.b");
        report.error(2, LintIssue::duplicate(1), "a.b");
        assert!(!report.is_ok());
        assert!(report.has_errors());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.diagnostics.len(), 3);
    }
}
