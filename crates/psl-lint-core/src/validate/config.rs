//! Lint configuration.

/// When groups of rules are closed and checked for sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupCheck {
    /// Rules are collected but groups are never closed, so no order
    /// diagnostics are produced.
    #[default]
    Dormant,
    /// Groups close at blank lines and comment lines. An error on a rule
    /// line suppresses the order check of its group.
    OnBoundaries,
}

/// Configuration options for a lint run.
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    /// When to run group order checks.
    pub group_check: GroupCheck,
    /// If true, a wildcard and an exception rule may share a name
    /// (`*.foo.bar` with `!foo.bar`).
    pub allow_wildcard_exception_pairs: bool,
}

impl LintConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets when group order checks run.
    pub fn with_group_check(mut self, group_check: GroupCheck) -> Self {
        self.group_check = group_check;
        self
    }

    /// Sets whether wildcard/exception pairs are allowed.
    pub fn with_wildcard_exception_pairs(mut self, allow: bool) -> Self {
        self.allow_wildcard_exception_pairs = allow;
        self
    }
}
