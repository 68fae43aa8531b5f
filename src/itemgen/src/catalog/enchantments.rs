//! Enchantment identifier to display name mapping
//!
//! Identifiers are the server API keys (legacy `DAMAGE_ALL` style as well as
//! the modern names) used in `Enchantments` entries.

/// Enchantment identifier and in-game display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enchantment {
    pub id: &'static str,
    pub name: &'static str,
}

const fn ench(id: &'static str, name: &'static str) -> Enchantment {
    Enchantment { id, name }
}

/// All known enchantments
pub const ENCHANTMENTS: &[Enchantment] = &[
    // Armor
    ench("PROTECTION_ENVIRONMENTAL", "Protection"),
    ench("PROTECTION_FIRE", "Fire Protection"),
    ench("PROTECTION_FALL", "Feather Falling"),
    ench("PROTECTION_EXPLOSIONS", "Blast Protection"),
    ench("PROTECTION_PROJECTILE", "Projectile Protection"),
    ench("OXYGEN", "Respiration"),
    ench("WATER_WORKER", "Aqua Affinity"),
    ench("THORNS", "Thorns"),
    ench("DEPTH_STRIDER", "Depth Strider"),
    ench("FROST_WALKER", "Frost Walker"),
    ench("SOUL_SPEED", "Soul Speed"),
    ench("SWIFT_SNEAK", "Swift Sneak"),
    ench("BINDING_CURSE", "Curse of Binding"),
    // Melee
    ench("DAMAGE_ALL", "Sharpness"),
    ench("DAMAGE_UNDEAD", "Smite"),
    ench("DAMAGE_ARTHROPODS", "Bane of Arthropods"),
    ench("KNOCKBACK", "Knockback"),
    ench("FIRE_ASPECT", "Fire Aspect"),
    ench("LOOT_BONUS_MOBS", "Looting"),
    ench("SWEEPING_EDGE", "Sweeping Edge"),
    // Tools
    ench("DIG_SPEED", "Efficiency"),
    ench("SILK_TOUCH", "Silk Touch"),
    ench("DURABILITY", "Unbreaking"),
    ench("LOOT_BONUS_BLOCKS", "Fortune"),
    ench("LUCK", "Luck of the Sea"),
    ench("LURE", "Lure"),
    // Ranged
    ench("ARROW_DAMAGE", "Power"),
    ench("ARROW_KNOCKBACK", "Punch"),
    ench("ARROW_FIRE", "Flame"),
    ench("ARROW_INFINITE", "Infinity"),
    ench("MULTISHOT", "Multishot"),
    ench("QUICK_CHARGE", "Quick Charge"),
    ench("PIERCING", "Piercing"),
    // Trident
    ench("LOYALTY", "Loyalty"),
    ench("IMPALING", "Impaling"),
    ench("RIPTIDE", "Riptide"),
    ench("CHANNELING", "Channeling"),
    // Mace
    ench("DENSITY", "Density"),
    ench("BREACH", "Breach"),
    ench("WIND_BURST", "Wind Burst"),
    // Any
    ench("MENDING", "Mending"),
    ench("VANISHING_CURSE", "Curse of Vanishing"),
    // Modern identifiers
    ench("PROTECTION", "Protection"),
    ench("FIRE_PROTECTION", "Fire Protection"),
    ench("FEATHER_FALLING", "Feather Falling"),
    ench("BLAST_PROTECTION", "Blast Protection"),
    ench("PROJECTILE_PROTECTION", "Projectile Protection"),
    ench("RESPIRATION", "Respiration"),
    ench("AQUA_AFFINITY", "Aqua Affinity"),
    ench("SHARPNESS", "Sharpness"),
    ench("SMITE", "Smite"),
    ench("BANE_OF_ARTHROPODS", "Bane of Arthropods"),
    ench("LOOTING", "Looting"),
    ench("EFFICIENCY", "Efficiency"),
    ench("UNBREAKING", "Unbreaking"),
    ench("FORTUNE", "Fortune"),
    ench("POWER", "Power"),
    ench("PUNCH", "Punch"),
    ench("FLAME", "Flame"),
    ench("INFINITY", "Infinity"),
    ench("LUCK_OF_THE_SEA", "Luck of the Sea"),
];

/// Display name for an enchantment identifier.
///
/// Unmapped identifiers are returned unchanged.
pub fn enchantment_name(id: &str) -> &str {
    ENCHANTMENTS
        .iter()
        .find(|e| e.id == id)
        .map_or(id, |e| e.name)
}
