//! Styled in-game tooltip preview
//!
//! Renders a scaled record as the rows a player would see when hovering the
//! item, top to bottom:
//!
//! 1. title (display name, or the internal name)
//! 2. enchantments
//! 3. potion effects, then flavor text
//! 4. spacer, ability (when present), spacer
//! 5. level / class / type tags
//! 6. separator and custom stats (when present)
//! 7. separator and one group per slot with stats (when present)
//!
//! The preview reads the scaled record directly and never goes through the
//! YAML document. Multi-line fields keep their blank lines here, since they
//! are visual spacers in a tooltip.

mod enchant;
mod markup;

pub use enchant::{
    format_enchantment_display, format_enchantment_entry, roman_numeral, EnchantmentLine,
};
pub use markup::{parse_markup, strip_markup, Span};

use serde::Serialize;

use crate::catalog::{split_words, SLOTS, STATS};
use crate::lore::{parse_lore, split_type};
use crate::number::{format_number, parse_finite};
use crate::record::{FieldKey, FlatItemRecord, Level, SchemaVersion};

pub const CLASS_TITLE: &str = "preview-title";
pub const CLASS_ENCHANTMENT: &str = "preview-enchantment";
pub const CLASS_DIM: &str = "preview-dim";
pub const CLASS_POTION: &str = "preview-potion";
pub const CLASS_FLAVOR: &str = "preview-flavor";
pub const CLASS_ABILITY: &str = "preview-ability";
pub const CLASS_TAG: &str = "preview-tag";
pub const CLASS_SPACER: &str = "preview-spacer";
pub const CLASS_SEPARATOR: &str = "preview-separator";
pub const CLASS_CUSTOM_STAT: &str = "preview-custom-stat";
pub const CLASS_SLOT_HEADER: &str = "preview-slot-header";
pub const CLASS_STAT: &str = "preview-stat";

const NAN_LITERAL: &str = "NaN";

/// One tooltip row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewLine {
    pub spans: Vec<Span>,
}

impl PreviewLine {
    /// Parse inline codes, with `base` classes on every span
    pub fn markup(text: &str, base: &[&'static str]) -> Self {
        let spans = parse_markup(text)
            .into_iter()
            .map(|mut span| {
                let mut classes = base.to_vec();
                classes.append(&mut span.classes);
                Span::new(classes, span.text)
            })
            .collect();
        PreviewLine { spans }
    }

    /// Literal text, no code parsing
    pub fn plain(text: impl Into<String>, classes: &[&'static str]) -> Self {
        PreviewLine {
            spans: vec![Span::new(classes.to_vec(), text)],
        }
    }

    pub fn spacer() -> Self {
        Self::plain("", &[CLASS_SPACER])
    }

    pub fn separator() -> Self {
        Self::plain("", &[CLASS_SEPARATOR, "mc-dark-gray"])
    }

    /// Visible text of the row
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Every class on the row, first occurrence order
    pub fn classes(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for class in self.spans.iter().flat_map(|s| s.classes.iter()) {
            if !out.contains(class) {
                out.push(class);
            }
        }
        out
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.spans.iter().any(|s| s.classes.contains(&class))
    }
}

/// Lore-derived sections, from their own columns or parsed out of `Lore`
#[derive(Debug, Default)]
struct LoreSections {
    potion_effects: Vec<String>,
    flavor_text: Vec<String>,
    ability: Option<String>,
    class: Option<String>,
    item_type: Option<String>,
}

impl LoreSections {
    fn from_record(record: &FlatItemRecord) -> Self {
        let mut sections = LoreSections {
            potion_effects: preview_list(record, "PotionEffects"),
            flavor_text: preview_list(record, "FlavorText"),
            ability: record.get("Ability").map(String::from),
            class: record.get("Class").map(String::from),
            item_type: record_type(record),
        };

        // The item-creator layout has no parsed lore columns
        if record.schema_version() == SchemaVersion::V1 {
            if let Some(lore) = record.get("Lore") {
                let tags = parse_lore(lore.split('\n'));
                sections.potion_effects = tags.potion_effects;
                sections.flavor_text = tags.flavor_text;
                sections.ability = sections.ability.or(tags.ability);
                sections.class = sections.class.or(tags.class);
                sections.item_type = sections.item_type.or(tags.item_type);
            }
        }
        sections
    }
}

/// `Type`, or `Supertype, Subtype` when only the split columns exist
fn record_type(record: &FlatItemRecord) -> Option<String> {
    if let Some(t) = record.get("Type") {
        return Some(t.to_string());
    }
    match (record.get("Supertype"), record.get("Subtype")) {
        (Some(sup), Some(sub)) => Some(format!("{sup}, {sub}")),
        (Some(sup), None) => Some(sup.to_string()),
        (None, Some(sub)) => Some(sub.to_string()),
        (None, None) => None,
    }
}

/// Newline list that keeps blank entries
fn preview_list(record: &FlatItemRecord, key: &str) -> Vec<String> {
    record
        .get(key)
        .map(|v| v.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect())
        .unwrap_or_default()
}

/// Stat value with an explicit sign.
///
/// Numbers get `+` when non-negative; percentages get `+` unless they are
/// already signed; anything else is shown as written.
pub fn signed_value(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(v) = parse_finite(trimmed) {
        return if v >= 0.0 {
            format!("+{}", format_number(v))
        } else {
            format_number(v)
        };
    }
    if trimmed.ends_with('%') && !trimmed.starts_with(['+', '-']) {
        return format!("+{trimmed}");
    }
    trimmed.to_string()
}

fn stat_color(signed: &str) -> &'static str {
    if signed.starts_with('-') {
        "mc-red"
    } else {
        "mc-blue"
    }
}

fn is_shown(value: &str) -> bool {
    !value.is_empty() && value != NAN_LITERAL
}

/// Render the tooltip rows for a (scaled) record
pub fn render_preview(record: &FlatItemRecord, level: Level) -> Vec<PreviewLine> {
    let mut lines = Vec::new();

    match record.get("Display") {
        Some(display) => lines.push(PreviewLine::markup(display, &[CLASS_TITLE])),
        None => lines.push(PreviewLine::plain(
            record.item_name().unwrap_or_default(),
            &[CLASS_TITLE, "mc-white"],
        )),
    }

    if let Some(enchantments) = record.get("Enchantments") {
        lines.extend(
            enchantments
                .split('\n')
                .filter(|e| !e.trim().is_empty())
                .map(enchantment_line),
        );
    }

    let sections = LoreSections::from_record(record);
    lines.extend(
        sections
            .potion_effects
            .iter()
            .map(|p| PreviewLine::markup(p, &[CLASS_POTION, "mc-gray"])),
    );
    lines.extend(
        sections
            .flavor_text
            .iter()
            .map(|f| PreviewLine::markup(f, &[CLASS_FLAVOR, "mc-dark-purple", "mc-italic"])),
    );

    lines.push(PreviewLine::spacer());
    if let Some(ability) = &sections.ability {
        lines.push(PreviewLine::markup(
            &format!("[{ability}]"),
            &[CLASS_ABILITY, "mc-gold"],
        ));
    }
    lines.push(PreviewLine::spacer());

    lines.push(tag_line(&format!("Level {level}")));
    if let Some(class) = &sections.class {
        lines.push(tag_line(class));
    }
    if let Some(item_type) = &sections.item_type {
        let (sup, sub) = split_type(item_type);
        let tag = match sub {
            Some(sub) => format!("{sup}, {sub}"),
            None => sup,
        };
        lines.push(tag_line(&tag));
    }

    let custom = custom_stat_lines(record);
    if !custom.is_empty() {
        lines.push(PreviewLine::separator());
        lines.extend(custom);
    }

    let groups = slot_group_lines(record);
    if !groups.is_empty() {
        lines.push(PreviewLine::separator());
        lines.extend(groups);
    }

    lines
}

fn enchantment_line(entry: &str) -> PreviewLine {
    match format_enchantment_entry(entry) {
        EnchantmentLine::Formatted(text) => {
            PreviewLine::plain(text, &[CLASS_ENCHANTMENT, "mc-gray"])
        }
        EnchantmentLine::Malformed(raw) => {
            PreviewLine::plain(raw, &[CLASS_ENCHANTMENT, CLASS_DIM, "mc-dark-gray"])
        }
    }
}

fn tag_line(tag: &str) -> PreviewLine {
    PreviewLine::plain(format!("[{tag}]"), &[CLASS_TAG, "mc-blue"])
}

fn custom_stat_lines(record: &FlatItemRecord) -> Vec<PreviewLine> {
    record
        .iter()
        .filter_map(|(key, value)| match FieldKey::parse(key) {
            FieldKey::CustomStat(name) if is_shown(value) => {
                let signed = signed_value(value);
                let color = stat_color(&signed);
                Some(PreviewLine::plain(
                    format!("{} {}", signed, split_words(name)),
                    &[CLASS_CUSTOM_STAT, color],
                ))
            }
            _ => None,
        })
        .collect()
}

fn slot_group_lines(record: &FlatItemRecord) -> Vec<PreviewLine> {
    let mut lines = Vec::new();
    for slot in SLOTS {
        let stats: Vec<PreviewLine> = STATS
            .iter()
            .filter_map(|stat| {
                let value = record.get(&slot.field(stat)).filter(|v| is_shown(v))?;
                let signed = signed_value(value);
                let color = stat_color(&signed);
                Some(PreviewLine::plain(
                    format!(" {} {}", signed, split_words(stat)),
                    &[CLASS_STAT, color],
                ))
            })
            .collect();
        if stats.is_empty() {
            continue;
        }
        lines.push(PreviewLine::plain(
            slot.header(),
            &[CLASS_SLOT_HEADER, "mc-gray"],
        ));
        lines.extend(stats);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FlatItemRecord {
        pairs.iter().copied().collect()
    }

    fn texts(lines: &[PreviewLine]) -> Vec<String> {
        lines.iter().map(PreviewLine::text).collect()
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(signed_value("12"), "+12");
        assert_eq!(signed_value("0"), "+0");
        assert_eq!(signed_value("-2.4"), "-2.4");
        assert_eq!(signed_value("30%"), "+30%");
        assert_eq!(signed_value("+30%"), "+30%");
        assert_eq!(signed_value("-5%"), "-5%");
        assert_eq!(signed_value("lots"), "lots");
    }

    #[test]
    fn test_full_tooltip_order() {
        let r = record(&[
            ("ItemName", "Sword1"),
            ("Display", "&6&lFlame Blade"),
            ("Enchantments", "DAMAGE_ALL:4\nFIRE_ASPECT:12\nBROKEN"),
            ("PotionEffects", "Speed I"),
            ("FlavorText", "Forged in fire.\n\nStill warm."),
            ("Ability", "Sunburst"),
            ("Class", "Angelic"),
            ("Type", "Melee, Sword"),
            ("Stat_CRITICAL_STRIKE_CHANCE", "10"),
            ("MainHand_Damage", "12"),
            ("MainHand_AttackSpeed", "-2.4"),
            ("Head_Armor", "+30%"),
        ]);
        let lines = render_preview(&r, Level::new(3));
        assert_eq!(
            texts(&lines),
            vec![
                "Flame Blade",
                "Sharpness IV",
                "Fire Aspect enchantment.level.12",
                "BROKEN",
                "Speed I",
                "Forged in fire.",
                "",
                "Still warm.",
                "",
                "[Sunburst]",
                "",
                "[Level 3]",
                "[Angelic]",
                "[Melee, Sword]",
                "",
                "+10 Critical Strike Chance",
                "",
                "When in Main Hand:",
                " -2.4 Attack Speed",
                " +12 Damage",
                "When on Head:",
                " +30% Armor",
            ]
        );
        assert_eq!(lines[0].classes(), vec![CLASS_TITLE, "mc-gold", "mc-bold"]);
        assert!(lines[3].has_class(CLASS_DIM));
        assert!(lines[6].has_class(CLASS_FLAVOR));
        assert!(lines[14].has_class(CLASS_SEPARATOR));
        assert!(lines[18].has_class("mc-red"));
    }

    #[test]
    fn test_missing_sections_are_omitted() {
        let lines = render_preview(&record(&[("ItemName", "Stick")]), Level::ONE);
        assert_eq!(texts(&lines), vec!["Stick", "", "", "[Level 1]"]);
        assert!(!lines.iter().any(|l| l.has_class(CLASS_SEPARATOR)));
    }

    #[test]
    fn test_ability_slot_keeps_both_spacers() {
        let lines = render_preview(&record(&[("ItemName", "Stick")]), Level::ONE);
        assert!(lines[1].has_class(CLASS_SPACER));
        assert!(lines[2].has_class(CLASS_SPACER));
        assert!(!lines.iter().any(|l| l.has_class(CLASS_ABILITY)));

        let with_ability = render_preview(
            &record(&[("ItemName", "Stick"), ("Ability", "Poke")]),
            Level::ONE,
        );
        assert_eq!(texts(&with_ability), vec!["Stick", "", "[Poke]", "", "[Level 1]"]);
    }

    #[test]
    fn test_item_creator_layout_parses_lore() {
        let r = record(&[
            ("ItemName", "Helm"),
            ("Lore", "&7Night Vision\n&5&oA relic.\n&9[Angelic]\n&9[Armor, Helmet]"),
            ("Head_Armor", "3"),
        ]);
        assert_eq!(r.schema_version(), SchemaVersion::V1);
        let lines = render_preview(&r, Level::new(2));
        assert_eq!(
            texts(&lines),
            vec![
                "Helm",
                "Night Vision",
                "A relic.",
                "",
                "",
                "[Level 2]",
                "[Angelic]",
                "[Armor, Helmet]",
                "",
                "When on Head:",
                " +3 Armor",
            ]
        );
    }

    #[test]
    fn test_supertype_subtype_columns() {
        let r = record(&[("ItemName", "x"), ("Supertype", "Ranged"), ("Subtype", "Bow")]);
        let lines = render_preview(&r, Level::ONE);
        assert!(texts(&lines).contains(&"[Ranged, Bow]".to_string()));
    }

    #[test]
    fn test_nan_stats_hidden() {
        let r = record(&[("ItemName", "x"), ("Chest_Armor", "NaN"), ("Stat_DODGE_CHANCE", "NaN")]);
        let lines = render_preview(&r, Level::ONE);
        assert!(!lines.iter().any(|l| l.has_class(CLASS_SEPARATOR)));
    }

    #[test]
    fn test_marker_only_display_keeps_title_row() {
        let r = record(&[("ItemName", "x"), ("Display", "&6")]);
        let lines = render_preview(&r, Level::ONE);
        assert_eq!(lines[0].text(), "");
        assert!(lines[0].has_class("mc-gold"));
    }

    #[test]
    fn test_serializes_for_browser() {
        let line = PreviewLine::markup("&aHi", &[CLASS_TITLE]);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(
            json,
            r#"{"spans":[{"classes":["preview-title","mc-green"],"text":"Hi"}]}"#
        );
    }
}
