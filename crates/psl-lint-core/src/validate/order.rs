//! Sort order checks for groups of rules.
//!
//! Consecutive rule lines form a group. Each entry is the rule's labels
//! reversed, so the top-level label comes first. A closed group must share
//! one top-level label and be sorted by label count, then by labels.

use super::error::LintIssue;

/// Labels of one rule, top-level label first.
pub type ReversedLabels = Vec<String>;

/// A group drained from the buffer and its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedGroup {
    /// The entries that were pending, in file order.
    pub entries: Vec<ReversedLabels>,
    /// True if the order check did not run.
    pub skipped: bool,
    /// The problem found, if any.
    pub issue: Option<LintIssue>,
}

/// Rules waiting for an order check.
#[derive(Debug, Clone, Default)]
pub struct GroupBuffer {
    entries: Vec<ReversedLabels>,
    skip_next: bool,
}

impl GroupBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one rule's reversed labels.
    pub fn push(&mut self, labels: ReversedLabels) {
        self.entries.push(labels);
    }

    /// Suppresses the check at the next close.
    pub fn skip_next(&mut self) {
        self.skip_next = true;
    }

    /// The entries pending so far.
    pub fn pending(&self) -> &[ReversedLabels] {
        &self.entries
    }

    /// Drains the buffer and checks the drained group.
    ///
    /// Groups with fewer than two entries and groups marked with
    /// [`skip_next`](Self::skip_next) are not checked. The skip mark is
    /// cleared and the buffer is empty afterwards in every case.
    pub fn close(&mut self) -> ClosedGroup {
        let entries = std::mem::take(&mut self.entries);
        let skipped = self.skip_next || entries.len() < 2;
        self.skip_next = false;

        let issue = if skipped { None } else { check_order(&entries) };

        ClosedGroup {
            entries,
            skipped,
            issue,
        }
    }
}

/// Checks that a group shares its top-level label and is sorted.
pub fn check_order(group: &[ReversedLabels]) -> Option<LintIssue> {
    let first = group.first()?;
    let tld = first.first().map(String::as_str).unwrap_or_default();

    if let Some(other) = group
        .iter()
        .map(|labels| labels.first().map(String::as_str).unwrap_or_default())
        .find(|label| *label != tld)
    {
        return Some(LintIssue::InconsistentGroupTld {
            expected: tld.to_string(),
            found: other.to_string(),
        });
    }

    let sorted = canonical_order(group);
    if sorted != group {
        return Some(LintIssue::UnsortedGroup {
            original: group.to_vec(),
            sorted,
        });
    }

    None
}

/// Sorts a group by label count, then lexicographically by labels.
pub fn canonical_order(group: &[ReversedLabels]) -> Vec<ReversedLabels> {
    let mut sorted = group.to_vec();
    sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sorted
}

/// Formats a group as a nested list, e.g. `[['com', 'a'], ['com', 'b']]`.
pub fn format_group(group: &[ReversedLabels]) -> String {
    let entries: Vec<String> = group
        .iter()
        .map(|labels| {
            let quoted: Vec<String> = labels.iter().map(|label| format!("'{label}'")).collect();
            format!("[{}]", quoted.join(", "))
        })
        .collect();
    format!("[{}]", entries.join(", "))
}
