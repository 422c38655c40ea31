//! Cheeseification: ordered substring substitutions.

use serde::{Deserialize, Serialize};

/// One case-sensitive substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub from: String,
    pub to: String,
}

impl SubstitutionRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

pub fn default_rules() -> Vec<SubstitutionRule> {
    vec![
        SubstitutionRule::new("Hello", "hallo-umi"),
        SubstitutionRule::new("friend", "friend-cheese"),
        SubstitutionRule::new("believe", "brie-lieve"),
        SubstitutionRule::new("good", "gouda"),
    ]
}

/// Apply `rules` in order.
///
/// Each rule replaces every non-overlapping occurrence in a single
/// left-to-right pass and never rescans what it inserted, so a rule whose
/// replacement contains its own pattern (`friend` → `friend-cheese`) still
/// terminates. Later rules see earlier output. Empty patterns are skipped.
pub fn cheeseify(text: &str, rules: &[SubstitutionRule]) -> String {
    rules
        .iter()
        .filter(|rule| !rule.from.is_empty())
        .fold(text.to_string(), |acc, rule| acc.replace(&rule.from, &rule.to))
}
