//! Random PSL file generation for benchmarking and testing.
//!
//! Generated files are lint-clean, including the group order check: every
//! group shares one top-level label, is sorted canonically and ends with a
//! blank line.

use crate::parse::{BEGIN_ICANN, BEGIN_PRIVATE, END_ICANN, END_PRIVATE};
use crate::validate::{ReversedLabels, canonical_order};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Configuration for generating PSL files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of top-level groups in the ICANN section.
    pub num_groups: usize,
    /// Number of company groups in the private section.
    pub num_private_groups: usize,
    /// Maximum second-level rules per group.
    pub max_rules_per_group: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_groups: 20,
            num_private_groups: 4,
            max_rules_per_group: 8,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with the given ICANN groups and proportional
    /// private groups.
    ///
    /// Private groups are set to ~20% of ICANN groups.
    pub fn new(num_groups: usize) -> Self {
        Self {
            num_groups,
            num_private_groups: num_groups / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 groups).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 groups).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 groups).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k groups).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of private groups explicitly.
    pub fn with_private_groups(mut self, num_private_groups: usize) -> Self {
        self.num_private_groups = num_private_groups;
        self
    }

    /// Set the maximum rules per group.
    pub fn with_max_rules(mut self, max: usize) -> Self {
        self.max_rules_per_group = max.max(1); // At least 1 rule
        self
    }
}

/// Vocabulary for generating realistic names.
mod vocabulary {
    pub const TLDS: &[&str] = &[
        "com", "net", "org", "jp", "uk", "de", "br", "au", "in", "no", "köln", "公司",
    ];
    pub const SECOND_LEVEL: &[&str] = &[
        "co", "ac", "gov", "edu", "mil", "city", "pref", "ne", "or", "go", "kommune",
    ];
    pub const COMPANIES: &[&str] = &[
        "blogspot", "cloudapp", "herokuapp", "pages", "netlify", "githubusercontent",
    ];
    pub const PRIVATE_TLDS: &[&str] = &["com", "net", "io", "app", "dev"];
}

/// Probability of a wildcard rule (percentage).
const WILDCARD_PROBABILITY: u32 = 10;

/// Probability that a wildcard gets an exception (percentage).
const EXCEPTION_PROBABILITY: u32 = 50;

/// Returns a unique top-level label for the given group index.
fn tld_name(index: usize) -> String {
    use vocabulary::TLDS;

    let base = TLDS[index % TLDS.len()];
    match index / TLDS.len() {
        0 => base.to_string(),
        round => format!("{base}{round}"),
    }
}

/// Writes one group, sorted canonically, followed by a blank line.
fn write_group(out: &mut String, rules: Vec<String>) {
    let mut by_labels: HashMap<ReversedLabels, String> = HashMap::new();
    for rule in rules {
        let name = rule.trim_start_matches("*.").trim_start_matches('!');
        let labels: ReversedLabels = name.split('.').rev().map(str::to_string).collect();
        by_labels.insert(labels, rule);
    }

    let keys: Vec<ReversedLabels> = by_labels.keys().cloned().collect();
    for labels in canonical_order(&keys) {
        if let Some(rule) = by_labels.get(&labels) {
            out.push_str(rule);
            out.push('\n');
        }
    }
    out.push('\n');
}

/// Generates second-level rules below `suffix`.
fn generate_rules(rng: &mut StdRng, suffix: &str, names: &[&str], max_rules: usize) -> Vec<String> {
    let count = rng.random_range(0..=max_rules);
    let mut rules = Vec::with_capacity(count + 1);

    for index in 0..count {
        let name = names[rng.random_range(0..names.len())];
        let domain = format!("{name}{index}.{suffix}");

        if rng.random_ratio(WILDCARD_PROBABILITY, 100) {
            if rng.random_ratio(EXCEPTION_PROBABILITY, 100) {
                rules.push(format!("!www.{domain}"));
            }
            rules.push(format!("*.{domain}"));
        } else {
            rules.push(domain);
        }
    }

    rules
}

/// Generates a PSL file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out = String::new();

    out.push_str("// Auto-generated Public Suffix List for benchmarking\n\n");

    out.push_str(BEGIN_ICANN);
    out.push_str("\n\n");
    for index in 0..config.num_groups {
        let tld = tld_name(index);
        out.push_str(&format!("// {tld} : generated\n"));

        let mut rules = vec![tld.clone()];
        rules.extend(generate_rules(
            &mut rng,
            &tld,
            SECOND_LEVEL,
            config.max_rules_per_group,
        ));
        write_group(&mut out, rules);
    }
    out.push_str(END_ICANN);
    out.push_str("\n\n");

    out.push_str(BEGIN_PRIVATE);
    out.push_str("\n\n");
    for index in 0..config.num_private_groups {
        let company = COMPANIES[rng.random_range(0..COMPANIES.len())];
        let tld = PRIVATE_TLDS[rng.random_range(0..PRIVATE_TLDS.len())];
        out.push_str(&format!("// {company} : generated company {index}\n"));

        // Private names carry the group index to stay clear of ICANN names
        let suffix = format!("{company}-{index}.{tld}");
        let mut rules = vec![suffix.clone()];
        rules.extend(generate_rules(
            &mut rng,
            &suffix,
            &["eu", "us", "app", "static"],
            config.max_rules_per_group,
        ));
        write_group(&mut out, rules);
    }
    out.push_str(END_PRIVATE);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{GroupCheck, LintConfig, lint_str};

    #[test]
    fn generated_file_is_clean() {
        let content = generate(&GeneratorConfig::small());
        let report = lint_str(&content, &LintConfig::new());
        assert!(
            report.diagnostics.is_empty(),
            "Generated content should lint clean: {:?}",
            report.diagnostics
        );
    }

    #[test]
    fn generated_file_is_sorted() {
        let content = generate(&GeneratorConfig::medium());
        let config = LintConfig::new().with_group_check(GroupCheck::OnBoundaries);
        let report = lint_str(&content, &config);
        assert!(
            report.diagnostics.is_empty(),
            "Generated groups should be sorted: {:?}",
            report.diagnostics
        );
    }

    #[test]
    fn deterministic_generation() {
        let config = GeneratorConfig::medium();
        let content1 = generate(&config);
        let content2 = generate(&config);
        assert_eq!(content1, content2, "Same seed should produce same output");
    }

    #[test]
    fn different_seeds_differ() {
        let content1 = generate(&GeneratorConfig::medium().with_seed(1));
        let content2 = generate(&GeneratorConfig::medium().with_seed(2));
        assert_ne!(content1, content2);
    }

    #[test]
    fn tld_names_are_unique() {
        let names: std::collections::HashSet<String> = (0..100).map(tld_name).collect();
        assert_eq!(names.len(), 100);
    }

    #[test]
    fn zero_groups_produces_markers_only() {
        let config = GeneratorConfig::new(0);
        let content = generate(&config);
        assert!(content.contains(BEGIN_ICANN));
        assert!(content.contains(END_PRIVATE));
        let report = lint_str(&content, &LintConfig::new());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn with_private_groups_override() {
        let config = GeneratorConfig::new(100).with_private_groups(50);
        assert_eq!(config.num_private_groups, 50);
    }

    #[test]
    fn with_max_rules_minimum() {
        let config = GeneratorConfig::default().with_max_rules(0);
        assert_eq!(config.max_rules_per_group, 1); // Should be at least 1
    }
}
