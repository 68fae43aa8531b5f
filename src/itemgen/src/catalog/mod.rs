//! Static reference data for item templates
//!
//! Hardcoded tables for equipment slots, attribute stats, custom plugin stats,
//! enchantment display names, rarity color codes, and the inline formatting
//! codes used in display names and lore. Everything here is immutable and
//! shared by every pipeline stage.

mod enchantments;
mod formatting;
mod rarity;
mod slots;
mod stats;

pub use enchantments::{enchantment_name, Enchantment, ENCHANTMENTS};
pub use formatting::{format_code, format_code_by_class, FormatCode, FormatKind, FORMAT_CODES};
pub use rarity::{rarity_by_code, rarity_by_name, RarityTier, RARITY_TIERS};
pub use slots::{slot_by_name, Slot, SlotKind, SLOTS};
pub use stats::{is_stat, split_words, CUSTOM_STATS, STATS};
