//! Lore and display-name tag extraction
//!
//! Item lore follows a loose house style:
//!
//! - `&7...` lines describe potion effects
//! - `&<color>&o...` lines are italic flavor text
//! - `&9[...]` lines are tags: `[Level N]`, then ability, class, and type
//!   (e.g. `[Melee, Sword]`), in that order, any of them optional
//!
//! Rarity is read from the first rarity color code in the display name.

use tracing::trace;

use crate::catalog::{rarity_by_code, RarityTier};

const POTION_PREFIX: &str = "&7";
const TAG_PREFIX: &str = "&9[";

/// Everything the lore parser can extract from a lore block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoreTags {
    pub potion_effects: Vec<String>,
    pub flavor_text: Vec<String>,
    pub ability: Option<String>,
    pub level: Option<String>,
    pub class: Option<String>,
    pub item_type: Option<String>,
}

/// Rarity from the first rarity color code (`&6`, `&b`, ...) in a display name
pub fn parse_rarity(display: &str) -> Option<&'static RarityTier> {
    let mut chars = display.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        let Some(&code) = chars.peek() else { break };
        if code.is_alphanumeric() || code == '_' {
            let mut key = String::from("&");
            key.push(code);
            if let Some(tier) = rarity_by_code(&key) {
                return Some(tier);
            }
        }
    }
    None
}

/// Parse lore lines into potion effects, flavor text, and bracket tags.
///
/// Blank lines are skipped. Tags other than the level are assigned by how
/// many there are: three are ability/class/type, two are class/type, one is
/// the type.
pub fn parse_lore<'a, I>(lines: I) -> LoreTags
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = LoreTags::default();
    let mut blue_tags: Vec<String> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(effect) = line.strip_prefix(POTION_PREFIX) {
            tags.potion_effects.push(effect.trim().to_string());
            continue;
        }

        if let Some(flavor) = flavor_text(line) {
            tags.flavor_text.push(flavor.trim().to_string());
            continue;
        }

        if let Some(rest) = line.strip_prefix(TAG_PREFIX) {
            let content = rest.trim_end().strip_suffix(']').unwrap_or(rest);
            match level_tag(content) {
                Some(level) => tags.level = Some(level.to_string()),
                None => blue_tags.push(content.to_string()),
            }
        }
    }

    trace!(count = blue_tags.len(), "Lore tags");
    let mut blue = blue_tags.into_iter();
    match blue.len() {
        3 => {
            tags.ability = blue.next();
            tags.class = blue.next();
            tags.item_type = blue.next();
        }
        2 => {
            tags.class = blue.next();
            tags.item_type = blue.next();
        }
        1 => tags.item_type = blue.next(),
        _ => {}
    }

    tags
}

/// Text after a `&<any>&o` prefix
fn flavor_text(line: &str) -> Option<&str> {
    let mut chars = line.char_indices();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some((_, '&')), Some(_), Some((_, '&')), Some((i, 'o'))) => Some(&line[i + 1..]),
        _ => None,
    }
}

/// Digits of a `Level N` tag
fn level_tag(content: &str) -> Option<&str> {
    let digits = content.strip_prefix("Level ")?;
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    (end > 0).then(|| &digits[..end])
}

/// Faction and main type, as used by the randomizer filters.
///
/// A bracket tag without a comma names the faction (`[Angelic]`); one with a
/// comma is a type tag whose first component is the main type
/// (`[Melee, Sword]` → `Melee`). Later tags win.
pub fn faction_and_type(lore: &str) -> (Option<String>, Option<String>) {
    let mut faction = None;
    let mut item_type = None;

    for line in lore.split('\n') {
        let Some(open) = line.find('[') else { continue };
        let Some(close) = line[open..].find(']').map(|i| open + i) else {
            continue;
        };
        let tag = &line[open + 1..close];
        match tag.split_once(',') {
            Some((main, _)) => item_type = Some(main.trim().to_string()),
            None => faction = Some(tag.to_string()),
        }
    }

    (faction, item_type)
}

/// Split a `Supertype, Subtype` type tag
pub fn split_type(item_type: &str) -> (String, Option<String>) {
    match item_type.split_once(',') {
        Some((sup, sub)) => (sup.trim().to_string(), Some(sub.trim().to_string())),
        None => (item_type.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rarity() {
        assert_eq!(parse_rarity("&6&lSunfire").map(|r| r.name), Some("Legendary"));
        assert_eq!(parse_rarity("&l&bDefender of Faith").map(|r| r.name), Some("Unique"));
        assert_eq!(parse_rarity("&lPlain"), None);
        assert_eq!(parse_rarity("No codes &"), None);
    }

    #[test]
    fn test_parse_full_lore() {
        let lore = [
            "&7Speed I",
            "&7Regeneration II",
            "&5&oForged in a dying star.",
            "",
            "&9[Sunburst]",
            "&9[Level 12]",
            "&9[Angelic]",
            "&9[Melee, Sword]",
        ];
        let tags = parse_lore(lore);
        assert_eq!(tags.potion_effects, vec!["Speed I", "Regeneration II"]);
        assert_eq!(tags.flavor_text, vec!["Forged in a dying star."]);
        assert_eq!(tags.ability.as_deref(), Some("Sunburst"));
        assert_eq!(tags.level.as_deref(), Some("12"));
        assert_eq!(tags.class.as_deref(), Some("Angelic"));
        assert_eq!(tags.item_type.as_deref(), Some("Melee, Sword"));
    }

    #[test]
    fn test_tag_assignment_by_count() {
        let tags = parse_lore(["&9[Angelic]", "&9[Armor, Helmet]"]);
        assert_eq!(tags.ability, None);
        assert_eq!(tags.class.as_deref(), Some("Angelic"));
        assert_eq!(tags.item_type.as_deref(), Some("Armor, Helmet"));

        let tags = parse_lore(["&9[Melee, Axe]"]);
        assert_eq!(tags.class, None);
        assert_eq!(tags.item_type.as_deref(), Some("Melee, Axe"));

        let tags = parse_lore(["&9[a]", "&9[b]", "&9[c]", "&9[d]"]);
        assert_eq!(tags.item_type, None);
    }

    #[test]
    fn test_faction_and_type() {
        let (faction, item_type) = faction_and_type("&9[Angelic]\n&9[Melee, Sword]");
        assert_eq!(faction.as_deref(), Some("Angelic"));
        assert_eq!(item_type.as_deref(), Some("Melee"));

        assert_eq!(faction_and_type("no tags here"), (None, None));
        assert_eq!(faction_and_type("broken ] [tag"), (None, None));
    }

    #[test]
    fn test_split_type() {
        assert_eq!(
            split_type("Melee, Sword"),
            ("Melee".to_string(), Some("Sword".to_string()))
        );
        assert_eq!(split_type("Shield"), ("Shield".to_string(), None));
    }
}
