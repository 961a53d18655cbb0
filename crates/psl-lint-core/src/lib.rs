//! PSL Lint Core
//!
//! A library for linting Public Suffix List files.
//!
//! # Features
//!
//! - **Sections**: Track the ICANN and private section markers
//! - **Rules**: Check casing, prefixes and every label of each rule
//! - **Duplicates**: Report rules whose bare name was already listed
//! - **Ordering**: Optionally check that groups of rules are sorted
//!
//! # Quick Start
//!
//! ```rust
//! use psl_lint_core::{LintConfig, lint_str};
//!
//! let input = r#"
//! // ===BEGIN ICANN DOMAINS===
//! com
//! Example.com
//! // ===END ICANN DOMAINS===
//! "#;
//!
//! let report = lint_str(input, &LintConfig::new());
//!
//! if report.is_ok() {
//!     println!("PSL file is valid!");
//! } else {
//!     for diagnostic in &report.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//! }
//! assert_eq!(report.error_count(), 1);
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Line classification, section markers and rule prefixes
//! - [`validate`]: The lint state machine and its checks

pub mod parse;
pub mod validate;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use parse::{Line, LineKind, Rule, RuleKind, Section};
pub use validate::{
    Diagnostic, GroupCheck, LintConfig, LintError, LintIssue, LintReport, LintState, Severity,
    lint_reader, lint_str,
};
