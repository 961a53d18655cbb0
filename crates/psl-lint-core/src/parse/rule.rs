//! Rule lines and their wildcard/exception prefixes.

use super::section::Section;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::char,
    combinator::opt,
};
use thiserror::Error;

/// How a rule applies to the names below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A plain suffix such as `co.uk`.
    Plain,
    /// `*.` prefixed: every immediate subdomain is a suffix.
    Wildcard,
    /// `!` prefixed: carves a name out of a wildcard.
    Exception,
}

/// A rule carried both a wildcard and an exception prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a rule cannot be both a wildcard and an exception")]
pub struct CombinedPrefixes;

impl RuleKind {
    /// Builds the kind from the prefixes found on a line.
    pub fn from_prefixes(wildcard: bool, exception: bool) -> Result<Self, CombinedPrefixes> {
        match (wildcard, exception) {
            (true, true) => Err(CombinedPrefixes),
            (true, false) => Ok(RuleKind::Wildcard),
            (false, true) => Ok(RuleKind::Exception),
            (false, false) => Ok(RuleKind::Plain),
        }
    }

    /// Returns true if `self` and `other` are one wildcard and one exception.
    ///
    /// `*.foo.bar` together with `!foo.bar` is the one combination of equal
    /// bare names that a suffix list legitimately contains.
    pub fn pairs_with(self, other: RuleKind) -> bool {
        matches!(
            (self, other),
            (RuleKind::Wildcard, RuleKind::Exception) | (RuleKind::Exception, RuleKind::Wildcard)
        )
    }
}

/// A rule line split into its prefixes and bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleText<'a> {
    /// A leading `*.` was present.
    pub wildcard: bool,
    /// A `!` was present (after the wildcard prefix, if any).
    pub exception: bool,
    /// The remaining dot-separated name.
    pub body: &'a str,
}

/// Strips a leading `*.` and then a leading `!` from a rule line.
pub fn split_prefixes(text: &str) -> RuleText<'_> {
    match prefixes(text) {
        Ok((body, (wildcard, exception))) => RuleText {
            wildcard,
            exception,
            body,
        },
        Err(_) => RuleText {
            wildcard: false,
            exception: false,
            body: text,
        },
    }
}

fn prefixes(input: &str) -> IResult<&str, (bool, bool)> {
    (opt(tag("*.")), opt(char('!')))
        .map(|(wildcard, exception)| (wildcard.is_some(), exception.is_some()))
        .parse(input)
}

/// A normalized suffix rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    /// The rule's kind.
    pub kind: RuleKind,
    /// The section the rule was found in.
    pub section: Section,
    /// The name without prefixes; the key for duplicate detection.
    pub body: &'a str,
    /// Dot-separated labels in file order. May contain empty labels.
    pub labels: Vec<&'a str>,
}

impl<'a> Rule<'a> {
    /// Creates a rule from a prefix-stripped body.
    pub fn new(body: &'a str, kind: RuleKind, section: Section) -> Self {
        Self {
            kind,
            section,
            body,
            labels: body.split('.').collect(),
        }
    }

    /// The labels top-level first, as used for group ordering.
    pub fn reversed_labels(&self) -> Vec<String> {
        self.labels.iter().rev().map(|label| label.to_string()).collect()
    }
}
