//! Stat name definitions

/// Vanilla attribute stats, in serialization and preview order
pub const STATS: &[&str] = &[
    "Armor",
    "ArmorToughness",
    "KnockbackResistance",
    "Health",
    "AttackSpeed",
    "MovementSpeed",
    "Damage",
    "Luck",
    "EntityInteractionRange",
];

/// Custom stats provided by the server's mob plugin, stored as `Stat_<NAME>`
pub const CUSTOM_STATS: &[&str] = &[
    "CRITICAL_STRIKE_CHANCE",
    "CRITICAL_STRIKE_DAMAGE",
    "CRITICAL_STRIKE_RESILIENCE",
    "DODGE_CHANCE",
    "DODGE_NEGATION",
    "PARRY_CHANCE",
    "PARRY_COUNTERATTACK",
    "PARRY_POWER",
    "PARRY_NEGATION",
];

pub fn is_stat(name: &str) -> bool {
    STATS.contains(&name)
}

/// Split an identifier into display words.
///
/// CamelCase splits at lower→upper boundaries (`KnockbackResistance` →
/// `Knockback Resistance`). SCREAMING_SNAKE splits at underscores and is
/// title-cased (`CRITICAL_STRIKE_CHANCE` → `Critical Strike Chance`).
pub fn split_words(ident: &str) -> String {
    if ident.contains('_') || ident.chars().all(|c| !c.is_ascii_lowercase()) {
        return ident
            .split('_')
            .filter(|w| !w.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;
    for c in ident.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()) {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_membership() {
        assert!(is_stat("Damage"));
        assert!(!is_stat("damage"));
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_words("KnockbackResistance"), "Knockback Resistance");
        assert_eq!(split_words("Armor"), "Armor");
        assert_eq!(
            split_words("EntityInteractionRange"),
            "Entity Interaction Range"
        );
    }

    #[test]
    fn test_split_screaming_snake() {
        assert_eq!(split_words("CRITICAL_STRIKE_CHANCE"), "Critical Strike Chance");
        assert_eq!(split_words("LUCK"), "Luck");
    }
}
