//! Flatten command handler
//!
//! Converts a YAML item template file into flat records that the other
//! commands (and the browser pages) load.

use anyhow::{Context, Result};
use itemgen::flatten_templates;
use std::fs;
use std::path::Path;

use crate::records;

/// Handle the flatten command
pub fn handle(input: &Path, output: Option<&Path>) -> Result<()> {
    let yaml = fs::read_to_string(input)
        .with_context(|| format!("Failed to read templates from {}", input.display()))?;
    let flat = flatten_templates(&yaml)
        .with_context(|| format!("Failed to flatten {}", input.display()))?;

    match output {
        Some(path) => {
            records::save(path, &flat)?;
            println!("Flattened {} items to {}", flat.len(), path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&flat).context("Failed to serialize records")?;
            println!("{}", json);
        }
    }

    Ok(())
}
