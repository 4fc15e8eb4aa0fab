//! CLI command handlers. Each writes its output to the given writer.

mod categorize;
mod completions;
mod list_rules;

pub use categorize::run_categorize;
pub use completions::run_completions;
pub use list_rules::run_list_rules;
