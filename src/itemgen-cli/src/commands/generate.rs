//! Generate command handler
//!
//! Picks a base item (by name, or at random among the filter matches) and
//! prints or writes its YAML configuration at the requested level.

use anyhow::{Context, Result};
use itemgen::{
    choose, generate, FlatItemRecord, GeneratedItem, ItemFilter, Level, SerializerOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::records;

/// Everything the generate command needs besides the records
#[derive(Debug, Default)]
pub struct GenerateRequest {
    pub item: Option<String>,
    pub level: Level,
    pub filter: ItemFilter,
    pub options: SerializerOptions,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Base record for the request
pub fn pick_base<'a>(
    records: &'a [FlatItemRecord],
    request: &GenerateRequest,
) -> Result<&'a FlatItemRecord> {
    if let Some(name) = &request.item {
        return records::find(records, name);
    }

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    choose(records, &request.filter, &mut rng).context("No items match the selected filters")
}

pub fn run(records: &[FlatItemRecord], request: &GenerateRequest) -> Result<GeneratedItem> {
    let base = pick_base(records, request)?;
    info!(item = base.item_name().unwrap_or_default(), "Selected base item");
    Ok(generate(base, request.level, &request.options)?)
}

/// Handle the generate command
pub fn handle(records: &[FlatItemRecord], request: &GenerateRequest) -> Result<()> {
    let item = run(records, request)?;

    match &request.output {
        Some(path) => {
            fs::write(path, &item.yaml)
                .with_context(|| format!("Failed to write YAML to {}", path.display()))?;
            println!(
                "Wrote {} (level {}) to {}",
                item.scaled.display_or_name(),
                item.level,
                path.display()
            );
        }
        None => print!("{}", item.yaml),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FlatItemRecord> {
        vec![
            [
                ("ItemName", "Sword1"),
                ("Display", "Flame Blade"),
                ("Lore", "&9[Angelic]\n&9[Melee, Sword]"),
                ("MainHand_Damage", "10"),
            ]
            .into_iter()
            .collect(),
            [("ItemName", "Bow1"), ("Lore", "&9[Nether]\n&9[Ranged, Bow]")]
                .into_iter()
                .collect(),
        ]
    }

    #[test]
    fn test_named_item() {
        let records = sample();
        let request = GenerateRequest {
            item: Some("Sword1".into()),
            level: Level::new(3),
            ..GenerateRequest::default()
        };
        let item = run(&records, &request).unwrap();
        assert!(item.yaml.contains("Damage: 12"));
    }

    #[test]
    fn test_unknown_item_is_error() {
        let request = GenerateRequest {
            item: Some("Nope".into()),
            ..GenerateRequest::default()
        };
        assert!(run(&sample(), &request).is_err());
    }

    #[test]
    fn test_filtered_random_pick() {
        let records = sample();
        let request = GenerateRequest {
            filter: ItemFilter::new(None, Some("Ranged".into())),
            seed: Some(1),
            ..GenerateRequest::default()
        };
        assert_eq!(pick_base(&records, &request).unwrap().item_name(), Some("Bow1"));

        let request = GenerateRequest {
            filter: ItemFilter::new(Some("Void".into()), None),
            seed: Some(1),
            ..GenerateRequest::default()
        };
        assert!(pick_base(&records, &request).is_err());
    }

    #[test]
    fn test_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sword.yml");
        let request = GenerateRequest {
            item: Some("Sword1".into()),
            level: Level::new(2),
            output: Some(path.clone()),
            ..GenerateRequest::default()
        };
        handle(&sample(), &request).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Flame Blade (Level 2)\n"));
    }
}
