//! Label validation.
//!
//! Labels may contain ASCII letters, digits and hyphens. Every non-ASCII
//! character is accepted as-is; IDN labels are expected in Unicode form,
//! so punycode labels are rejected.

use super::error::LintIssue;

/// Returns true if `c` may appear in a label.
pub fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii()
}

/// Checks a single label, returning the first problem found.
///
/// The checks run in order and stop at the first hit: empty label,
/// punycode prefix, double hyphen, illegal character.
pub fn check_label(label: &str) -> Option<LintIssue> {
    if label.is_empty() {
        return Some(LintIssue::EmptyLabel);
    }

    if label.starts_with("xn--") {
        return Some(LintIssue::Punycode {
            label: label.to_string(),
        });
    }

    if label.contains("--") {
        return Some(LintIssue::DoubleMinus {
            label: label.to_string(),
        });
    }

    label
        .chars()
        .find(|&c| !is_label_char(c))
        .map(|c| LintIssue::illegal_character(label, c))
}

/// Returns true if `text` is unchanged by lowercasing.
pub fn is_lowercase(text: &str) -> bool {
    text.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    })
}
