//! Tab classifier: maps one tab to exactly one category name.
//!
//! The title and URL are lowercased, the URL authority is extracted, and the
//! compiled rules are tested in declaration order. The first rule with a
//! matching domain, pattern, or keyword wins; a tab that matches nothing is
//! labelled [`DEFAULT_CATEGORY`]. Classification never fails: missing fields
//! and unparseable URLs degrade to empty strings.

mod authority;

pub use authority::url_authority;

use crate::rules::{MatchedBy, RuleError, RuleSet, RuleTable};
use crate::tab::Tab;

/// Category for tabs that match no rule.
pub const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// Outcome of classifying one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'r> {
    pub category: &'r str,
    /// `None` when the tab fell through to [`DEFAULT_CATEGORY`].
    pub matched: Option<MatchedBy<'r>>,
}

/// Owns a compiled rule table and classifies tabs against it.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    pub fn from_table(table: &RuleTable) -> Result<Self, RuleError> {
        Ok(Self {
            rules: RuleSet::compile(table)?,
        })
    }

    /// Classifier over the built-in rule table.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_table(&RuleTable::builtin())
    }

    /// Category name for `tab`.
    pub fn classify(&self, tab: &Tab) -> &str {
        self.explain(tab).category
    }

    /// Category for `tab` along with the criterion that selected it.
    pub fn explain(&self, tab: &Tab) -> Classification<'_> {
        let title = tab.title().to_lowercase();
        let url = tab.url().to_lowercase();
        let authority = url_authority(&url);

        for rule in self.rules.iter() {
            if let Some(matched) = rule.matches(&authority, &url, &title) {
                tracing::debug!(
                    "tab url={} -> {} ({:?})",
                    tab.url(),
                    rule.category(),
                    matched
                );
                return Classification {
                    category: rule.category(),
                    matched: Some(matched),
                };
            }
        }

        tracing::debug!("tab url={} -> {} (no rule)", tab.url(), DEFAULT_CATEGORY);
        Classification {
            category: DEFAULT_CATEGORY,
            matched: None,
        }
    }
}
