//! Level scaling
//!
//! Scaling adds 10% of the base value per level above 1:
//!
//! ```text
//! scaled = base + base * (level - 1) * 0.10
//! ```
//!
//! Numeric stat cells are rounded to two decimals; enchantment levels are
//! rounded to whole levels and never drop below 1. Scaling always starts from
//! the unscaled template: applying it twice does not compose.

use tracing::{debug, trace};

use crate::number::{format_number, parse_finite, parse_int, round2, round_half_up};
use crate::record::{FlatItemRecord, Level, OPTION_PREFIX};

pub const ENCHANTMENTS_FIELD: &str = "Enchantments";

/// Produce a scaled copy of `record`. The source record is left untouched.
pub fn scale(record: &FlatItemRecord, level: Level) -> FlatItemRecord {
    let mut scaled = record.clone();
    if level.is_base() {
        return scaled;
    }

    let multiplier = level.multiplier();
    debug!(
        item = record.item_name().unwrap_or_default(),
        %level,
        multiplier,
        "Scaling item"
    );

    for (key, value) in scaled.iter_mut() {
        if !is_scalable_key(key) {
            continue;
        }
        if let Some(scaled_value) = scale_value(value, multiplier) {
            trace!(field = %key, from = %value, to = %scaled_value, "Scaled stat");
            *value = scaled_value;
        }
    }

    if let Some(enchantments) = record.get(ENCHANTMENTS_FIELD) {
        scaled.insert(
            ENCHANTMENTS_FIELD,
            scale_enchantments(enchantments, multiplier),
        );
    }

    scaled
}

/// Stat-like keys: anything with a separator that is not an option flag
fn is_scalable_key(key: &str) -> bool {
    key.contains('_') && !key.starts_with(OPTION_PREFIX)
}

/// Scaled cell value, or `None` if the cell is not a non-zero number
pub fn scale_value(value: &str, multiplier: f64) -> Option<String> {
    let base = parse_finite(value)?;
    if base == 0.0 {
        return None;
    }
    Some(format_number(round2(base + base * multiplier)))
}

/// Scale every `NAME:level` entry of a newline-separated enchantment list.
///
/// Entries of any other shape are kept verbatim.
pub fn scale_enchantments(list: &str, multiplier: f64) -> String {
    list.split('\n')
        .map(|entry| scale_enchantment(entry, multiplier).unwrap_or_else(|| entry.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scale_enchantment(entry: &str, multiplier: f64) -> Option<String> {
    let mut parts = entry.split(':');
    let (name, level) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(level), None) => (name, level),
        _ => return None,
    };
    let base = parse_int(level)?;
    Some(format!("{}:{}", name, scale_enchantment_level(base, multiplier)))
}

/// Scaled enchantment level, rounded and clamped to at least 1
pub fn scale_enchantment_level(base: i64, multiplier: f64) -> i64 {
    let base = base as f64;
    (round_half_up(base + base * multiplier) as i64).max(1)
}
