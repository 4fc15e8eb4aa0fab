//! tabcat core: label browser tab records with categories by static rules.

pub mod classifier;
pub mod config;
pub mod grouping;
pub mod logging;
pub mod rules;
pub mod tab;

pub use classifier::{Classification, Classifier, DEFAULT_CATEGORY};
pub use grouping::{categorize, group_tabs, parse_tabs, CategoryGroups, InputError};
pub use rules::{MatchedBy, RuleError, RuleSet, RuleSpec, RuleTable};
pub use tab::Tab;
