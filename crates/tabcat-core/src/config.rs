use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::RuleTable;

/// Optional configuration loaded from `~/.config/tabcat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabcatConfig {
    /// TOML rules file replacing the built-in rule table. Relative paths are
    /// resolved against the config file's directory.
    #[serde(default)]
    pub rules_file: Option<PathBuf>,
}

impl TabcatConfig {
    /// Rule table to classify with: `override_path` if given, else the
    /// configured rules file, else the built-in table.
    pub fn rule_table(&self, override_path: Option<&Path>) -> Result<RuleTable> {
        match override_path.or(self.rules_file.as_deref()) {
            Some(path) => Ok(RuleTable::load(path)?),
            None => Ok(RuleTable::builtin()),
        }
    }
}

/// Existing config file in the XDG config dirs, if any.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tabcat")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> Result<TabcatConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let mut cfg: TabcatConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;

    if let Some(rules) = cfg.rules_file.as_mut() {
        if rules.is_relative() {
            if let Some(dir) = path.parent() {
                *rules = dir.join(&*rules);
            }
        }
    }
    Ok(cfg)
}

/// Load configuration from `path`, or from the XDG config file when `path`
/// is None. A missing XDG config file yields defaults; nothing is created.
pub fn load_or_default(path: Option<&Path>) -> Result<TabcatConfig> {
    if let Some(path) = path {
        return load(path);
    }
    match find_config_file()? {
        Some(found) => {
            tracing::debug!("using config at {}", found.display());
            load(&found)
        }
        None => Ok(TabcatConfig::default()),
    }
}
