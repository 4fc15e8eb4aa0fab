//! Rule table: the ordered category rules a tab is tested against.
//!
//! A table is plain data (`RuleSpec` records in declaration order). It comes
//! either from the built-in set or from a TOML rules file, and is compiled
//! once into a `RuleSet` before any tab is classified:
//! - `domains` are substrings of the URL authority (host[:port])
//! - `patterns` are case-insensitive regexes searched in the lowercased URL
//! - `keywords` are substrings of the lowercased title
//!
//! The first rule with any matching criterion decides the category.

mod builtin;
mod compiled;
mod file;

pub use compiled::{CompiledRule, MatchedBy, RuleError, RuleSet};

use serde::{Deserialize, Serialize};

/// Criteria for one category, as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Ordered sequence of category rules. Order is significant: first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(rename = "category", default)]
    pub categories: Vec<RuleSpec>,
}

impl RuleTable {
    pub fn new(categories: Vec<RuleSpec>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_declaration_order() {
        let table = RuleTable::builtin();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(
            names,
            [
                "YouTube Videos",
                "AI & Claude Tools",
                "Task Management Tools",
                "GitHub Repositories",
                "Development Tools",
                "Translation & Localization",
                "Local Development",
                "Search Results",
            ]
        );
    }

    #[test]
    fn builtin_table_compiles() {
        let set = RuleSet::compile(&RuleTable::builtin()).unwrap();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn rule_spec_lists_default_to_empty() {
        let spec: RuleSpec = toml::from_str(r#"name = "Reading""#).unwrap();
        assert_eq!(spec.name, "Reading");
        assert!(spec.domains.is_empty());
        assert!(spec.patterns.is_empty());
        assert!(spec.keywords.is_empty());
    }
}
