//! `tabcat [INPUT]` – categorize tabs from a file or stdin.

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;
use tabcat_core::{grouping, Classifier};

/// Reads the whole input: the named file, or stdin when `path` is None.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("read input file: {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Writes the output document (grouping or error object) for `input` as
/// 2-space indented JSON followed by a newline.
pub fn run_categorize<W: Write>(
    classifier: &Classifier,
    path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let input = read_input(path)?;
    let doc = grouping::categorize(classifier, &input);
    serde_json::to_writer_pretty(&mut *out, &doc).context("write output")?;
    writeln!(out)?;
    Ok(())
}
