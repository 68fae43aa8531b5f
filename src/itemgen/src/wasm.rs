//! WebAssembly bindings for itemgen
//!
//! Records cross the boundary as JSON objects (`{"ItemName": "...", ...}`);
//! structured results come back as JSON text for the page to parse.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::generate::generate;
use crate::preview::{format_enchantment_display, render_preview};
use crate::random::{choose, facets, ItemFilter};
use crate::record::{FlatItemRecord, Level};
use crate::scale::scale;
use crate::yaml::{QuoteStyle, SerializerOptions};

fn parse_record(record_json: &str) -> Result<FlatItemRecord, JsValue> {
    serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid record: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Render the YAML configuration block for a record at `level`
///
/// # Arguments
/// * `record_json` - The base record as a JSON object
/// * `level` - Target level (values below 1 mean 1)
/// * `quote_style` - `"single"` or `"double"`
#[wasm_bindgen(js_name = generateYaml)]
pub fn generate_yaml(record_json: &str, level: i32, quote_style: &str) -> Result<String, JsValue> {
    let record = parse_record(record_json)?;
    let options = SerializerOptions {
        quote_style: quote_style.parse::<QuoteStyle>().map_err(|e| JsValue::from_str(&e))?,
        ..SerializerOptions::default()
    };
    generate(&record, Level::new(i64::from(level)), &options)
        .map(|item| item.yaml)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render preview lines as JSON (`[{"spans": [{"classes": [...], "text": "..."}]}]`)
#[wasm_bindgen(js_name = renderPreview)]
pub fn render_preview_json(record_json: &str, level: i32) -> Result<String, JsValue> {
    let record = parse_record(record_json)?;
    let level = Level::new(i64::from(level));
    to_json(&render_preview(&scale(&record, level), level))
}

/// Scale a record and return it as a JSON object
#[wasm_bindgen(js_name = scaleRecord)]
pub fn scale_record(record_json: &str, level: i32) -> Result<String, JsValue> {
    let record = parse_record(record_json)?;
    to_json(&scale(&record, Level::new(i64::from(level))))
}

/// Format an enchantment name and level the way the client shows it
#[wasm_bindgen(js_name = formatEnchantment)]
pub fn format_enchantment(name: &str, level: i32) -> String {
    format_enchantment_display(name, i64::from(level))
}

/// JavaScript-friendly pool of base records for the randomizer page
#[wasm_bindgen]
pub struct ItemPool {
    records: Vec<FlatItemRecord>,
}

#[wasm_bindgen]
impl ItemPool {
    /// Load records from a JSON array; rows without an item name are dropped
    #[wasm_bindgen(constructor)]
    pub fn new(records_json: &str) -> Result<ItemPool, JsValue> {
        let records = FlatItemRecord::list_from_json(records_json)
            .map_err(|e| JsValue::from_str(&format!("Parse failed: {}", e)))?;
        Ok(ItemPool {
            records: records.into_iter().filter(FlatItemRecord::is_eligible).collect(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Faction names for the filter list
    #[wasm_bindgen(js_name = factions)]
    pub fn factions(&self) -> js_sys::Array {
        facets(&self.records)
            .factions
            .iter()
            .map(|f| JsValue::from_str(f))
            .collect()
    }

    /// Main item types for the filter list
    #[wasm_bindgen(js_name = itemTypes)]
    pub fn item_types(&self) -> js_sys::Array {
        facets(&self.records)
            .item_types
            .iter()
            .map(|t| JsValue::from_str(t))
            .collect()
    }

    /// Pick a matching record (as JSON), or `undefined` when none match
    ///
    /// # Arguments
    /// * `faction` - Faction name, or `"Any"`
    /// * `item_type` - Main type, or `"Any"`
    /// * `seed` - Seed for the choice
    #[wasm_bindgen(js_name = pick)]
    pub fn pick(
        &self,
        faction: Option<String>,
        item_type: Option<String>,
        seed: f64,
    ) -> Result<Option<String>, JsValue> {
        let filter = ItemFilter::new(faction, item_type);
        let mut rng = StdRng::seed_from_u64(seed as u64);
        choose(&self.records, &filter, &mut rng)
            .map(to_json)
            .transpose()
    }
}
