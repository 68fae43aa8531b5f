//! Record file loading

use anyhow::{bail, Context, Result};
use itemgen::FlatItemRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Supported record file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(RecordFormat::Json),
            Some("yml" | "yaml") => Ok(RecordFormat::Yaml),
            _ => bail!(
                "Unsupported records file {} (expected .json, .yml or .yaml)",
                path.display()
            ),
        }
    }
}

/// Load records, dropping rows without an item name
pub fn load(path: &Path) -> Result<Vec<FlatItemRecord>> {
    let format = RecordFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;

    let records = match format {
        RecordFormat::Json => FlatItemRecord::list_from_json(&content),
        RecordFormat::Yaml => FlatItemRecord::list_from_yaml(&content),
    }
    .with_context(|| format!("Failed to parse records in {}", path.display()))?;

    let total = records.len();
    let records: Vec<FlatItemRecord> = records.into_iter().filter(|r| r.is_eligible()).collect();
    if records.len() < total {
        debug!(dropped = total - records.len(), "Dropped records without ItemName");
    }

    for record in &records {
        let unknown = record.unrecognized_keys();
        if !unknown.is_empty() {
            warn!(
                item = record.item_name().unwrap_or_default(),
                schema = %record.schema_version(),
                ?unknown,
                "Unrecognized fields"
            );
        }
    }

    debug!(count = records.len(), path = %path.display(), "Loaded records");
    Ok(records)
}

/// Find a record by item name
pub fn find<'a>(records: &'a [FlatItemRecord], name: &str) -> Result<&'a FlatItemRecord> {
    records
        .iter()
        .find(|r| r.item_name() == Some(name))
        .with_context(|| format!("No item named {name:?}"))
}

/// Write records as JSON or YAML, chosen by extension
pub fn save(path: &Path, records: &[FlatItemRecord]) -> Result<()> {
    let content = match RecordFormat::from_path(path)? {
        RecordFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize records")?
        }
        RecordFormat::Yaml => serde_yaml::to_string(records).context("Failed to serialize records")?,
    };
    fs::write(path, content)
        .with_context(|| format!("Failed to write records to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_drops_unnamed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(
            &path,
            r#"[
                {"ItemName": "Sword1", "MainHand_Damage": 10, "Option_Unbreakable": true},
                {"ItemName": "", "Display": "ghost"},
                {"Display": "also ghost"}
            ]"#,
        )
        .unwrap();

        let records = load(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("MainHand_Damage"), Some("10"));
        assert_eq!(records[0].get("Option_Unbreakable"), Some("True"));
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.yml");
        fs::write(&path, "- ItemName: Helm\n  Head_Armor: 2.5\n  Lore: null\n").unwrap();

        let records = load(&path).unwrap();
        assert_eq!(records[0].get("Head_Armor"), Some("2.5"));
        assert!(!records[0].contains("Lore"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.csv");
        fs::write(&path, "ItemName\nSword1\n").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_find_by_name() {
        let records: Vec<FlatItemRecord> = vec![[("ItemName", "A")].into_iter().collect()];
        assert!(find(&records, "A").is_ok());
        assert!(find(&records, "B").is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<FlatItemRecord> =
            vec![[("ItemName", "A"), ("Head_Armor", "1.50")].into_iter().collect()];
        for name in ["out.json", "out.yaml"] {
            let path = dir.path().join(name);
            save(&path, &records).unwrap();
            assert_eq!(load(&path).unwrap(), records);
        }
    }
}
