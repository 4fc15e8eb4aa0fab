//! Compiled rules: regexes built once, domains and keywords lowercased.

use regex::{Regex, RegexBuilder};
use std::path::PathBuf;
use thiserror::Error;

use super::{RuleSpec, RuleTable};

/// Errors surfaced while loading or compiling a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern {pattern:?} in category {category:?}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("read rules file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse rules file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which criterion of a rule matched, with the entry that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedBy<'r> {
    Domain(&'r str),
    Pattern(&'r str),
    Keyword(&'r str),
}

/// One category rule ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    category: String,
    domains: Vec<String>,
    patterns: Vec<Regex>,
    keywords: Vec<String>,
}

impl CompiledRule {
    pub fn compile(spec: &RuleSpec) -> Result<Self, RuleError> {
        let patterns = spec
            .patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RuleError::InvalidPattern {
                        category: spec.name.clone(),
                        pattern: p.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            category: spec.name.clone(),
            domains: lowercase_all(&spec.domains),
            patterns,
            keywords: lowercase_all(&spec.keywords),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Tests domains, then patterns, then keywords. Inputs must already be
    /// lowercased by the caller.
    pub fn matches(&self, authority: &str, url: &str, title: &str) -> Option<MatchedBy<'_>> {
        if let Some(d) = self.domains.iter().find(|d| authority.contains(d.as_str())) {
            return Some(MatchedBy::Domain(d));
        }
        if let Some(p) = self.patterns.iter().find(|p| p.is_match(url)) {
            return Some(MatchedBy::Pattern(p.as_str()));
        }
        self.keywords
            .iter()
            .find(|k| title.contains(k.as_str()))
            .map(|k| MatchedBy::Keyword(k))
    }
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

/// A compiled, immutable rule table in declaration order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compiles every rule; fails on the first malformed pattern.
    pub fn compile(table: &RuleTable) -> Result<Self, RuleError> {
        let rules = table
            .categories
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
