//! Nested item documents
//!
//! The structurer regroups a flat (scaled) record into the categories the
//! item plugin's configuration expects: identity, lore, enchantments,
//! options, per-slot attributes, and custom stats. Only categories with data
//! appear in the document; there are never empty containers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{SLOTS, STATS};
use crate::number::{is_canonical_number, parse_finite};
use crate::record::{FieldKey, FlatItemRecord};

/// Placeholder some exports write into empty numeric cells
const NAN_LITERAL: &str = "NaN";

/// Largest integer an f64 represents exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A configuration scalar: number where the value is numeric, text otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Number, stored as an integer when it has no fractional part
    pub fn from_number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
            Scalar::Int(value as i64)
        } else {
            Scalar::Float(value)
        }
    }

    /// Number if the cell parses at all, otherwise the original text
    pub fn coerce(value: &str) -> Self {
        parse_finite(value).map_or_else(|| Scalar::Text(value.to_string()), Scalar::from_number)
    }

    /// Number only if the cell is exactly a number's canonical spelling.
    ///
    /// Keeps `"+30%"` or `"1.50"` as written.
    pub fn exact(value: &str) -> Self {
        match parse_finite(value) {
            Some(v) if is_canonical_number(value) => Scalar::from_number(v),
            _ => Scalar::Text(value.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }
}

/// Armor trim sub-object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Item option flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbreakable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_texture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<Trim>,
}

impl ItemOptions {
    pub fn is_empty(&self) -> bool {
        self.unbreakable.is_none()
            && self.color.is_none()
            && self.skin_texture.is_none()
            && self.trim.is_none()
    }
}

/// Slot name → stat name → value
pub type Attributes = IndexMap<String, IndexMap<String, Scalar>>;

/// Categorized item configuration, ready for serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NestedItemDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enchantments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ItemOptions>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub banner_layers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide: Vec<String>,
}

impl NestedItemDocument {
    /// Attribute value for a slot and stat
    pub fn attribute(&self, slot: &str, stat: &str) -> Option<&Scalar> {
        self.attributes.get(slot).and_then(|s| s.get(stat))
    }

    /// Category keys present in the serialized document, in output order
    pub fn categories(&self) -> Vec<&'static str> {
        let present = [
            ("Id", self.id.is_some()),
            ("Data", self.data.is_some()),
            ("Model", self.model.is_some()),
            ("Display", self.display.is_some()),
            ("Lore", !self.lore.is_empty()),
            ("Enchantments", !self.enchantments.is_empty()),
            ("Options", self.options.is_some()),
            ("Attributes", !self.attributes.is_empty()),
            ("Stats", !self.stats.is_empty()),
            ("BannerLayers", !self.banner_layers.is_empty()),
            ("Hide", !self.hide.is_empty()),
        ];
        present
            .into_iter()
            .filter_map(|(key, has)| has.then_some(key))
            .collect()
    }
}

/// Split a delimited cell into configuration list entries.
///
/// Entries are trimmed and blank entries dropped; configuration lists never
/// carry spacer lines (the preview keeps them, see [`crate::preview`]).
pub fn split_config_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build the nested document for a (scaled) record
pub fn to_document(record: &FlatItemRecord) -> NestedItemDocument {
    NestedItemDocument {
        id: record.get("Id").map(String::from),
        data: record.get("Data").map(Scalar::coerce),
        model: record.get("Model").map(Scalar::coerce),
        display: record.get("Display").map(String::from),
        lore: list_field(record, "Lore", '\n'),
        enchantments: list_field(record, "Enchantments", '\n'),
        options: collect_options(record),
        attributes: collect_attributes(record),
        stats: collect_stats(record),
        banner_layers: list_field(record, "BannerLayers", '\n'),
        hide: list_field(record, "Hide", '|'),
    }
}

fn list_field(record: &FlatItemRecord, key: &str, separator: char) -> Vec<String> {
    record
        .get(key)
        .map(|v| split_config_list(v, separator))
        .unwrap_or_default()
}

fn collect_options(record: &FlatItemRecord) -> Option<ItemOptions> {
    let material = record.get("Trim_Material").map(String::from);
    let pattern = record.get("Trim_Pattern").map(String::from);
    let trim = (material.is_some() || pattern.is_some()).then(|| Trim { material, pattern });

    let options = ItemOptions {
        // Only the exact `True` literal counts
        unbreakable: (record.get("Option_Unbreakable") == Some("True")).then_some(true),
        color: record.get("Option_Color").map(String::from),
        skin_texture: record.get("Option_SkinTexture").map(String::from),
        trim,
    };

    (!options.is_empty()).then_some(options)
}

fn collect_attributes(record: &FlatItemRecord) -> Attributes {
    let mut attributes = Attributes::new();
    for slot in SLOTS {
        let stats: IndexMap<String, Scalar> = STATS
            .iter()
            .filter_map(|stat| {
                let value = record.get(&slot.field(stat))?;
                (value != NAN_LITERAL).then(|| (stat.to_string(), Scalar::exact(value)))
            })
            .collect();
        if !stats.is_empty() {
            attributes.insert(slot.name.to_string(), stats);
        }
    }
    attributes
}

fn collect_stats(record: &FlatItemRecord) -> Vec<String> {
    record
        .iter()
        .filter_map(|(key, value)| match FieldKey::parse(key) {
            FieldKey::CustomStat(name) if !value.is_empty() && value != NAN_LITERAL => {
                Some(format!("{} {}", name.replace('_', ""), value))
            }
            _ => None,
        })
        .collect()
}
