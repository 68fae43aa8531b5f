//! Rarity tier definitions

/// Rarity tier information, keyed by the color code that marks it in a
/// display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityTier {
    pub tier: u8,
    pub code: &'static str,
    pub name: &'static str,
}

/// All rarity tiers in order
pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier {
        tier: 1,
        code: "&2",
        name: "Uncommon",
    },
    RarityTier {
        tier: 2,
        code: "&1",
        name: "Rare",
    },
    RarityTier {
        tier: 3,
        code: "&5",
        name: "Epic",
    },
    RarityTier {
        tier: 4,
        code: "&b",
        name: "Unique",
    },
    RarityTier {
        tier: 5,
        code: "&d",
        name: "Exotic",
    },
    RarityTier {
        tier: 6,
        code: "&6",
        name: "Legendary",
    },
];

/// Get rarity tier by color code (e.g. `&6`)
pub fn rarity_by_code(code: &str) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.code == code)
}

/// Get rarity tier by name, ignoring case
pub fn rarity_by_name(name: &str) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}
