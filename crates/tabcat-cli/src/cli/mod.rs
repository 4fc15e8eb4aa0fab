//! CLI for the tabcat tab categorizer.

mod commands;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use std::io::{self, Write};
use std::path::PathBuf;
use tabcat_core::config;
use tabcat_core::Classifier;

use commands::{run_categorize, run_completions, run_list_rules};

/// Categorize browser tabs (a JSON array of tab objects) by URL and title rules.
#[derive(Debug, Parser)]
#[command(name = "tabcat")]
#[command(about = "tabcat: sort browser tabs into categories", long_about = None)]
pub struct Cli {
    /// JSON file holding an array of tab objects; reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// TOML rules file replacing the built-in rule table.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/tabcat/config.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective rule table as JSON and exit.
    #[arg(long, conflicts_with = "input")]
    pub list_rules: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Runs the parsed command, writing its JSON (or completion script) to `out`.
    pub fn execute<W: Write>(self, out: &mut W) -> Result<()> {
        if let Some(shell) = self.completions {
            return run_completions(shell, out);
        }

        let cfg = config::load_or_default(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let table = cfg.rule_table(self.rules.as_deref())?;

        if self.list_rules {
            return run_list_rules(&table, out);
        }

        let classifier = Classifier::from_table(&table)?;
        run_categorize(&classifier, self.input.as_deref(), out)
    }
}

#[cfg(test)]
mod tests;
