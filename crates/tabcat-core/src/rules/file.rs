//! Custom rule tables from TOML files.
//!
//! ```toml
//! [[category]]
//! name = "Rust"
//! domains = ["crates.io", "docs.rs"]
//! patterns = ['rust-lang\.org']
//! keywords = ["cargo"]
//! ```
//!
//! Categories are tested in file order.

use std::fs;
use std::path::Path;

use super::{RuleError, RuleTable};

impl RuleTable {
    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Reads a rules file, replacing the built-in table entirely.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let data = fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&data).map_err(|source| RuleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if table.is_empty() {
            tracing::warn!(
                "rules file {} defines no categories; every tab will be Miscellaneous",
                path.display()
            );
        }
        tracing::debug!(
            "loaded {} rule categories from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}
