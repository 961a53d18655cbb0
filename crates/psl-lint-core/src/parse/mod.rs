//! Parsing helpers for Public Suffix List files.
//!
//! PSL files are processed one line at a time, so this module does not
//! build a tree. It provides the pieces the linter needs for each line:
//! preprocessing and classification, section marker recognition, and
//! splitting a rule into its prefixes and labels.
//!
//! # Example
//!
//! ```rust
//! use psl_lint_core::parse::{Line, LineKind, RuleKind, split_prefixes};
//!
//! let line = Line::new(1, "*.kawasaki.jp\n");
//! if let LineKind::Rule(text) = line.kind() {
//!     let rule = split_prefixes(text);
//!     assert_eq!(RuleKind::from_prefixes(rule.wildcard, rule.exception), Ok(RuleKind::Wildcard));
//!     assert_eq!(rule.body, "kawasaki.jp");
//! }
//! ```

mod line;
mod rule;
mod section;

pub use line::{
    Line, LineKind, classify, is_line_space, split_carriage_returns, split_lines,
};
pub use rule::{CombinedPrefixes, Rule, RuleKind, RuleText, split_prefixes};
pub use section::{
    BEGIN_ICANN, BEGIN_PRIVATE, END_ICANN, END_PRIVATE, Marker, Section, parse_marker,
};
