//! Validation of Public Suffix List files.
//!
//! The linter is a single pass over the input. [`LintState`] feeds each
//! line through the section tracker, the rule and label checks, the
//! duplicate table and the group order buffer, and collects every finding
//! in a [`LintReport`].
//!
//! # Example
//!
//! ```rust
//! use psl_lint_core::validate::{LintConfig, LintIssue, lint_str};
//!
//! let input = "// ===BEGIN ICANN DOMAINS===\nexample.com\nexample.com\n// ===END ICANN DOMAINS===\n";
//! let report = lint_str(input, &LintConfig::new());
//!
//! assert!(report.has_errors());
//! assert_eq!(report.diagnostics[0].issue, LintIssue::duplicate(2));
//! for diagnostic in &report.diagnostics {
//!     println!("{}", diagnostic);
//! }
//! ```

mod config;
mod duplicates;
mod error;
mod labels;
mod order;
mod section;
mod state;

// Re-export public types
pub use config::{GroupCheck, LintConfig};
pub use duplicates::DuplicateDetector;
pub use error::{Category, Diagnostic, LintError, LintIssue, LintReport, Severity};
pub use labels::{check_label, is_label_char, is_lowercase};
pub use order::{
    ClosedGroup, GroupBuffer, ReversedLabels, canonical_order, check_order, format_group,
};
pub use section::SectionTracker;
pub use state::{LintState, lint_reader, lint_str};
