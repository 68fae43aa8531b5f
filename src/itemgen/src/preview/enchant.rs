//! Enchantment display formatting

use crate::catalog::enchantment_name;
use crate::number::parse_int;

/// Highest level the client shows as a numeral
pub const MAX_ROMAN_LEVEL: i64 = 10;

const NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Uppercase Roman numeral for levels 1 through 10
pub fn roman_numeral(level: i64) -> Option<&'static str> {
    if (1..=MAX_ROMAN_LEVEL).contains(&level) {
        usize::try_from(level - 1).ok().map(|i| NUMERALS[i])
    } else {
        None
    }
}

/// `Sharpness V`, or the client's translation key above level 10
pub fn format_enchantment_display(name: &str, level: i64) -> String {
    match roman_numeral(level) {
        Some(numeral) => format!("{name} {numeral}"),
        None if level > MAX_ROMAN_LEVEL => format!("{name} enchantment.level.{level}"),
        None => format!("{name} {level}"),
    }
}

/// One rendered enchantment entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnchantmentLine {
    Formatted(String),
    /// Entry not in `NAME:level` form, shown as written
    Malformed(String),
}

/// Format an `IDENTIFIER:level` entry using the catalog display name.
///
/// Levels of 0 or below keep their written form, so `X:-01` shows `X -01`.
pub fn format_enchantment_entry(entry: &str) -> EnchantmentLine {
    let Some((id, raw_level)) = entry.split_once(':') else {
        return EnchantmentLine::Malformed(entry.to_string());
    };
    let name = enchantment_name(id.trim());
    match parse_int(raw_level) {
        Some(level) if level <= 0 => {
            EnchantmentLine::Formatted(format!("{name} {}", raw_level.trim()))
        }
        Some(level) => EnchantmentLine::Formatted(format_enchantment_display(name, level)),
        None => EnchantmentLine::Malformed(entry.to_string()),
    }
}
