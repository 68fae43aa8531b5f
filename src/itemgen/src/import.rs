//! Item template import
//!
//! Flattens a YAML template file, keyed by internal item name, into flat
//! records:
//!
//! ```yaml
//! Sword1:
//!   Id: DIAMOND_SWORD
//!   Display: '&6&lFlame Blade'
//!   Lore:
//!   - '&9[Melee, Sword]'
//!   Attributes:
//!     MainHand:
//!       Damage: 10
//! ```
//!
//! Lore-derived columns (rarity, potion effects, flavor text, tags) are filled
//! in by the lore parser. Attributes and custom stats outside the catalog are
//! dropped.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{is_stat, slot_by_name, CUSTOM_STATS};
use crate::lore::{parse_lore, parse_rarity};
use crate::record::{FlatItemRecord, ITEM_NAME};

pub const UNKNOWN_RARITY: &str = "Unknown";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to parse item templates: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One item template as written in the file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct Template {
    id: Option<Value>,
    display: Option<Value>,
    model: Option<Value>,
    data: Option<Value>,
    lore: Vec<Value>,
    enchantments: Vec<Value>,
    skills: Vec<Value>,
    banner_layers: Vec<Value>,
    hide: Vec<Value>,
    attributes: IndexMap<String, IndexMap<String, Value>>,
    stats: Vec<Value>,
    options: IndexMap<String, Value>,
}

/// Text form of a YAML scalar. Booleans use the tabular `True`/`False`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        _ => None,
    }
}

fn joined(values: &[Value], separator: &str) -> String {
    values
        .iter()
        .filter_map(scalar_text)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Insert unless empty, so absent and empty stay indistinguishable
fn put(record: &mut FlatItemRecord, key: &str, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        record.insert(key, value);
    }
}

/// Catalog custom stat named by a `Stats` entry, with or without underscores
fn custom_stat_name(name: &str) -> Option<&'static str> {
    let squashed = name.replace('_', "");
    CUSTOM_STATS
        .iter()
        .copied()
        .find(|stat| stat.replace('_', "").eq_ignore_ascii_case(&squashed))
}

/// Flatten a YAML template file into one record per top-level key.
///
/// Empty (null) templates are skipped with a warning.
pub fn flatten_templates(yaml: &str) -> Result<Vec<FlatItemRecord>, ImportError> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let templates: IndexMap<String, Option<Template>> = serde_yaml::from_str(yaml)?;
    let mut records = Vec::with_capacity(templates.len());

    for (name, template) in templates {
        let Some(template) = template else {
            warn!(item = %name, "Skipping empty template");
            continue;
        };
        records.push(flatten_template(&name, &template));
    }

    debug!(count = records.len(), "Flattened templates");
    Ok(records)
}

fn flatten_template(name: &str, template: &Template) -> FlatItemRecord {
    let mut record = FlatItemRecord::new();
    record.insert(ITEM_NAME, name);

    put(&mut record, "Id", template.id.as_ref().and_then(scalar_text));
    let display = template.display.as_ref().and_then(scalar_text);
    put(&mut record, "Display", display.clone());
    put(&mut record, "Model", template.model.as_ref().and_then(scalar_text));
    put(&mut record, "Data", template.data.as_ref().and_then(scalar_text));

    let lore: Vec<String> = template.lore.iter().filter_map(scalar_text).collect();
    put(&mut record, "Lore", Some(lore.join("\n")));

    let rarity = display
        .as_deref()
        .and_then(parse_rarity)
        .map_or(UNKNOWN_RARITY, |tier| tier.name);
    record.insert("Rarity", rarity);

    let tags = parse_lore(lore.iter().map(String::as_str));
    put(&mut record, "PotionEffects", Some(tags.potion_effects.join("\n")));
    put(&mut record, "FlavorText", Some(tags.flavor_text.join("\n")));
    put(&mut record, "Ability", tags.ability);
    put(&mut record, "Level", tags.level);
    put(&mut record, "Class", tags.class);
    put(&mut record, "Type", tags.item_type);

    put(&mut record, "Enchantments", Some(joined(&template.enchantments, "\n")));
    put(&mut record, "Skills", Some(joined(&template.skills, "\n")));
    put(&mut record, "Hide", Some(joined(&template.hide, "|")));
    put(&mut record, "BannerLayers", Some(joined(&template.banner_layers, "\n")));

    for (slot_name, stats) in &template.attributes {
        let Some(slot) = slot_by_name(slot_name) else {
            debug!(item = %name, slot = %slot_name, "Ignoring unknown slot");
            continue;
        };
        for (stat, value) in stats {
            if !is_stat(stat) {
                debug!(item = %name, stat = %stat, "Ignoring unknown stat");
                continue;
            }
            put(&mut record, &slot.field(stat), scalar_text(value));
        }
    }

    for entry in template.stats.iter().filter_map(scalar_text) {
        let mut parts = entry.split_whitespace();
        let (Some(stat), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if let Some(stat) = custom_stat_name(stat) {
            record.insert(format!("Stat_{stat}"), value);
        }
    }

    put(
        &mut record,
        "Option_Unbreakable",
        template.options.get("Unbreakable").and_then(scalar_text),
    );
    put(
        &mut record,
        "Option_Color",
        template.options.get("Color").and_then(scalar_text),
    );
    put(
        &mut record,
        "Option_SkinTexture",
        template.options.get("SkinTexture").and_then(scalar_text),
    );
    if let Some(Value::Mapping(trim)) = template.options.get("Trim") {
        put(&mut record, "Trim_Material", trim.get("Material").and_then(scalar_text));
        put(&mut record, "Trim_Pattern", trim.get("Pattern").and_then(scalar_text));
    }

    let unknown = record.unrecognized_keys();
    if !unknown.is_empty() {
        warn!(item = %name, ?unknown, "Template produced unrecognized fields");
    }

    record
}
