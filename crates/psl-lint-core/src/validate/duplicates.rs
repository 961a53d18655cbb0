//! Duplicate and ambiguous rule detection.
//!
//! Rules are keyed by their name without wildcard or exception prefix, so
//! `foo.bar`, `*.foo.bar` and `!foo.bar` all collide.

use super::error::LintIssue;
use crate::parse::RuleKind;
use std::collections::HashMap;

/// Where and how a rule name was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FirstSighting {
    /// Line number of the first occurrence.
    line: usize,
    /// Kind of the first occurrence.
    kind: RuleKind,
    /// Line of the accepted wildcard/exception partner, if one was seen.
    paired: Option<usize>,
}

/// Tracks the first occurrence of every rule name.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    seen: HashMap<String, FirstSighting>,
    allow_wildcard_exception_pairs: bool,
}

impl DuplicateDetector {
    /// Creates a detector that reports every repeated name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets a wildcard and an exception share a name.
    pub fn with_wildcard_exception_pairs(mut self, allow: bool) -> Self {
        self.allow_wildcard_exception_pairs = allow;
        self
    }

    /// Records a rule name, reporting it if it was seen before.
    ///
    /// Only the first occurrence is remembered; repeats never replace it.
    /// When pairs are allowed, the first partner of the opposite kind is
    /// accepted and remembered, and a repeat of that partner cites it.
    pub fn observe(&mut self, name: &str, line: usize, kind: RuleKind) -> Option<LintIssue> {
        let Some(first) = self.seen.get_mut(name) else {
            self.seen.insert(
                name.to_string(),
                FirstSighting {
                    line,
                    kind,
                    paired: None,
                },
            );
            return None;
        };

        if !(self.allow_wildcard_exception_pairs && first.kind.pairs_with(kind)) {
            return Some(LintIssue::duplicate(first.line));
        }

        match first.paired {
            Some(partner) => Some(LintIssue::duplicate(partner)),
            None => {
                first.paired = Some(line);
                None
            }
        }
    }

    /// Number of distinct names seen.
    pub fn distinct_names(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_is_recorded() {
        let mut detector = DuplicateDetector::new();
        assert_eq!(detector.observe("example.com", 2, RuleKind::Plain), None);
        assert_eq!(detector.distinct_names(), 1);
    }

    #[test]
    fn exact_duplicate() {
        let mut detector = DuplicateDetector::new();
        detector.observe("example.com", 2, RuleKind::Plain);
        assert_eq!(
            detector.observe("example.com", 3, RuleKind::Plain),
            Some(LintIssue::duplicate(2))
        );
    }

    #[test]
    fn repeats_cite_the_first_line() {
        let mut detector = DuplicateDetector::new();
        detector.observe("a.b", 1, RuleKind::Plain);
        detector.observe("a.b", 5, RuleKind::Plain);
        assert_eq!(
            detector.observe("a.b", 9, RuleKind::Plain),
            Some(LintIssue::duplicate(1))
        );
    }

    #[test]
    fn plain_and_wildcard_collide() {
        let mut detector = DuplicateDetector::new();
        detector.observe("foo.bar", 1, RuleKind::Plain);
        assert!(detector.observe("foo.bar", 2, RuleKind::Wildcard).is_some());
    }

    #[test]
    fn wildcard_and_exception_collide_by_default() {
        let mut detector = DuplicateDetector::new();
        detector.observe("foo.bar", 1, RuleKind::Wildcard);
        assert_eq!(
            detector.observe("foo.bar", 2, RuleKind::Exception),
            Some(LintIssue::duplicate(1))
        );
    }

    #[test]
    fn wildcard_and_exception_pair_when_allowed() {
        let mut detector = DuplicateDetector::new().with_wildcard_exception_pairs(true);
        detector.observe("foo.bar", 1, RuleKind::Exception);
        assert_eq!(detector.observe("foo.bar", 2, RuleKind::Wildcard), None);
        // Plain still conflicts with both
        assert_eq!(
            detector.observe("foo.bar", 3, RuleKind::Plain),
            Some(LintIssue::duplicate(1))
        );
    }

    #[test]
    fn different_names_do_not_collide() {
        let mut detector = DuplicateDetector::new();
        detector.observe("a.com", 1, RuleKind::Plain);
        assert_eq!(detector.observe("b.com", 2, RuleKind::Plain), None);
        assert_eq!(detector.distinct_names(), 2);
    }

    #[test]
    fn repeated_exception_after_allowed_pair() {
        let mut detector = DuplicateDetector::new().with_wildcard_exception_pairs(true);
        assert_eq!(detector.observe("foo.bar", 1, RuleKind::Wildcard), None);
        assert_eq!(detector.observe("foo.bar", 2, RuleKind::Exception), None);
        assert_eq!(
            detector.observe("foo.bar", 3, RuleKind::Exception),
            Some(LintIssue::duplicate(2))
        );
        assert_eq!(
            detector.observe("foo.bar", 4, RuleKind::Wildcard),
            Some(LintIssue::duplicate(1))
        );
    }

    #[test]
    fn repeated_wildcard_after_allowed_pair() {
        let mut detector = DuplicateDetector::new().with_wildcard_exception_pairs(true);
        assert_eq!(detector.observe("foo.bar", 1, RuleKind::Exception), None);
        assert_eq!(detector.observe("foo.bar", 2, RuleKind::Wildcard), None);
        assert_eq!(
            detector.observe("foo.bar", 3, RuleKind::Wildcard),
            Some(LintIssue::duplicate(2))
        );
        assert_eq!(
            detector.observe("foo.bar", 4, RuleKind::Exception),
            Some(LintIssue::duplicate(1))
        );
    }
}
