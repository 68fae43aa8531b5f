//! Flat item records and their field-name schema
//!
//! A record is one row of the item template table: an ordered map from field
//! name to string value. Field names follow a handful of patterns which
//! [`FieldKey`] classifies, so callers never have to build or pick apart
//! names by hand.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::catalog::{self, Slot};

/// Field holding the record's unique internal name
pub const ITEM_NAME: &str = "ItemName";

pub const OPTION_PREFIX: &str = "Option_";
pub const STAT_PREFIX: &str = "Stat_";
pub const TRIM_PREFIX: &str = "Trim_";

/// Fields that are not built from a prefix or slot pattern
pub const PLAIN_FIELDS: &[&str] = &[
    "ItemName",
    "Id",
    "Data",
    "Model",
    "Display",
    "Lore",
    "Enchantments",
    "Rarity",
    "Level",
    "Class",
    "Type",
    "Supertype",
    "Subtype",
    "Modifiers",
    "Ability",
    "PotionEffects",
    "FlavorText",
    "Skills",
    "BannerLayers",
    "Hide",
];

/// Plain fields that only appear in the template-derived layout
const V2_PLAIN_FIELDS: &[&str] = &[
    "Model",
    "Level",
    "Type",
    "Ability",
    "PotionEffects",
    "FlavorText",
    "Skills",
    "BannerLayers",
    "Hide",
];

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to parse JSON records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML records: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Record has no ItemName")]
    MissingItemName,
}

/// Classification of a record field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
    /// `<Slot>_<Stat>`, e.g. `MainHand_Damage`
    SlotStat {
        slot: &'static Slot,
        stat: &'a str,
    },
    /// `Option_<Name>`
    Option(&'a str),
    /// `Stat_<NAME>` custom stat line
    CustomStat(&'a str),
    /// `Trim_Material` / `Trim_Pattern`
    Trim(&'a str),
    /// One of [`PLAIN_FIELDS`]
    Plain(&'a str),
    Unrecognized(&'a str),
}

impl<'a> FieldKey<'a> {
    pub fn parse(key: &'a str) -> Self {
        if let Some(name) = key.strip_prefix(OPTION_PREFIX) {
            return FieldKey::Option(name);
        }
        if let Some(name) = key.strip_prefix(STAT_PREFIX) {
            return FieldKey::CustomStat(name);
        }
        if let Some(name) = key.strip_prefix(TRIM_PREFIX) {
            return FieldKey::Trim(name);
        }
        if let Some((slot, stat)) = key.split_once('_') {
            if let Some(slot) = catalog::slot_by_name(slot) {
                if catalog::is_stat(stat) {
                    return FieldKey::SlotStat { slot, stat };
                }
            }
        }
        if PLAIN_FIELDS.contains(&key) {
            return FieldKey::Plain(key);
        }
        FieldKey::Unrecognized(key)
    }

    /// Whether the key only exists in the template-derived layout
    fn is_v2_only(&self) -> bool {
        match self {
            FieldKey::SlotStat { slot, stat } => {
                slot.name == "All" || *stat == "EntityInteractionRange"
            }
            FieldKey::Option(name) => *name == "SkinTexture",
            FieldKey::CustomStat(_) | FieldKey::Trim(_) => true,
            FieldKey::Plain(name) => V2_PLAIN_FIELDS.contains(name),
            FieldKey::Unrecognized(_) => false,
        }
    }
}

/// Record layout generation.
///
/// Both layouts share one superset schema; the version only decides which
/// derived columns have to be filled in from `Lore` when they are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Item-creator layout: `Data`, `Option_Color`, class/supertype/subtype
    V1,
    /// Template layout: `Model`, parsed lore columns, custom stats, trims
    V2,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => write!(f, "v1"),
            SchemaVersion::V2 => write!(f, "v2"),
        }
    }
}

/// Item level. Always at least 1; level 1 leaves values unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    pub const ONE: Level = Level(1);

    /// Clamp any integer to a valid level
    pub fn new(level: i64) -> Self {
        Level(u32::try_from(level.max(1)).unwrap_or(u32::MAX))
    }

    /// Parse user input, defaulting to level 1 when absent or invalid
    pub fn parse(input: &str) -> Self {
        crate::number::parse_int(input).map_or(Level::ONE, Level::new)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Fraction added on top of the base value: 10% per level above 1
    pub fn multiplier(self) -> f64 {
        f64::from(self.0 - 1) * 0.10
    }

    pub fn is_base(self) -> bool {
        self.0 == 1
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::ONE
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One flat item template row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatItemRecord {
    fields: IndexMap<String, String>,
}

impl FlatItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, treating empty cells as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Raw value of a field, empty cells included
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Fields in record order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut String)> {
        self.fields.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn item_name(&self) -> Option<&str> {
        self.get(ITEM_NAME)
    }

    /// Display name, falling back to the internal name
    pub fn display_or_name(&self) -> &str {
        self.get("Display").or_else(|| self.item_name()).unwrap_or("")
    }

    /// Records without an item name are dropped before any processing
    pub fn is_eligible(&self) -> bool {
        self.item_name().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn ensure_eligible(&self) -> Result<(), RecordError> {
        if self.is_eligible() {
            Ok(())
        } else {
            Err(RecordError::MissingItemName)
        }
    }

    pub fn schema_version(&self) -> SchemaVersion {
        let v2 = self
            .fields
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .any(|(k, _)| FieldKey::parse(k).is_v2_only());
        if v2 {
            SchemaVersion::V2
        } else {
            SchemaVersion::V1
        }
    }

    /// Keys that match none of the known field patterns
    pub fn unrecognized_keys(&self) -> Vec<&str> {
        self.fields
            .keys()
            .filter(|k| matches!(FieldKey::parse(k), FieldKey::Unrecognized(_)))
            .map(String::as_str)
            .collect()
    }

    /// Parse a JSON array of records
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML sequence of records
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, RecordError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatItemRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FlatItemRecord {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A cell as it may appear in JSON/YAML input
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    fn into_string(self) -> String {
        match self {
            // Tabular exports spell booleans this way
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) => crate::number::format_number(v),
            Cell::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for FlatItemRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: IndexMap<String, Option<Cell>> = IndexMap::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(k, v)| v.map(|cell| (k, cell.into_string())))
            .collect())
    }
}

/// Keep only records that can be processed
pub fn eligible(records: &[FlatItemRecord]) -> impl Iterator<Item = &FlatItemRecord> {
    records.iter().filter(|r| r.is_eligible())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FlatItemRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_field_key_classification() {
        match FieldKey::parse("MainHand_Damage") {
            FieldKey::SlotStat { slot, stat } => {
                assert_eq!(slot.name, "MainHand");
                assert_eq!(stat, "Damage");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(FieldKey::parse("Option_Color"), FieldKey::Option("Color"));
        assert_eq!(
            FieldKey::parse("Stat_DODGE_CHANCE"),
            FieldKey::CustomStat("DODGE_CHANCE")
        );
        assert_eq!(FieldKey::parse("Trim_Pattern"), FieldKey::Trim("Pattern"));
        assert_eq!(FieldKey::parse("Lore"), FieldKey::Plain("Lore"));
        assert_eq!(
            FieldKey::parse("MainHand_Mana"),
            FieldKey::Unrecognized("MainHand_Mana")
        );
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let r = record(&[("ItemName", "Sword1"), ("Display", "")]);
        assert_eq!(r.get("Display"), None);
        assert_eq!(r.get_raw("Display"), Some(""));
        assert_eq!(r.display_or_name(), "Sword1");
    }

    #[test]
    fn test_eligibility() {
        assert!(record(&[("ItemName", "Sword1")]).is_eligible());
        assert!(!record(&[("ItemName", "  ")]).is_eligible());
        assert!(!record(&[("Id", "DIAMOND_SWORD")]).is_eligible());
        assert!(matches!(
            record(&[]).ensure_eligible(),
            Err(RecordError::MissingItemName)
        ));
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(Level::parse("3").get(), 3);
        assert_eq!(Level::parse("").get(), 1);
        assert_eq!(Level::parse("abc").get(), 1);
        assert_eq!(Level::parse("0").get(), 1);
        assert_eq!(Level::parse("-4").get(), 1);
        assert!(Level::default().is_base());
        assert!((Level::new(3).multiplier() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_schema_version_detection() {
        let v1 = record(&[
            ("ItemName", "a"),
            ("Data", "3"),
            ("Option_Color", "FF0000"),
            ("Model", ""),
        ]);
        assert_eq!(v1.schema_version(), SchemaVersion::V1);

        let v2 = record(&[("ItemName", "b"), ("Stat_DODGE_CHANCE", "5")]);
        assert_eq!(v2.schema_version(), SchemaVersion::V2);

        let v2_slot = record(&[("ItemName", "c"), ("All_Luck", "1")]);
        assert_eq!(v2_slot.schema_version(), SchemaVersion::V2);
        assert_eq!(v1.schema_version().to_string(), "v1");
        assert_eq!(v2.schema_version().to_string(), "v2");
    }

    #[test]
    fn test_eligible_skips_unnamed() {
        let records = vec![
            record(&[("ItemName", "a")]),
            record(&[("Display", "Nameless")]),
            record(&[("ItemName", " ")]),
            record(&[("ItemName", "b")]),
        ];
        let names: Vec<_> = eligible(&records).filter_map(FlatItemRecord::item_name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_unrecognized_keys() {
        let r = record(&[("ItemName", "a"), ("Colour", "red"), ("Head_Armor", "2")]);
        assert_eq!(r.unrecognized_keys(), vec!["Colour"]);
    }

    #[test]
    fn test_json_cells_are_stringified() {
        let records = FlatItemRecord::list_from_json(
            r#"[{"ItemName": "Sword1", "MainHand_Damage": 10, "Option_Unbreakable": true,
                 "Data": 2.5, "Model": null}]"#,
        )
        .unwrap();
        let r = &records[0];
        assert_eq!(r.get("MainHand_Damage"), Some("10"));
        assert_eq!(r.get("Option_Unbreakable"), Some("True"));
        assert_eq!(r.get("Data"), Some("2.5"));
        assert!(r.get_raw("Model").is_none());
    }

    #[test]
    fn test_yaml_records_keep_order() {
        let records = FlatItemRecord::list_from_yaml(
            "- ItemName: Sword1\n  Stat_PARRY_POWER: '3'\n  Stat_DODGE_CHANCE: '5'\n",
        )
        .unwrap();
        let keys: Vec<_> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ItemName", "Stat_PARRY_POWER", "Stat_DODGE_CHANCE"]);
    }
}
