//! `tabcat --list-rules` – print the effective rule table.

use anyhow::Result;
use std::io::Write;
use tabcat_core::RuleTable;

pub fn run_list_rules<W: Write>(table: &RuleTable, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &table.categories)?;
    writeln!(out)?;
    Ok(())
}
