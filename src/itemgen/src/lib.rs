//! # itemgen
//!
//! Item template library - level scaling, configuration output, and tooltip
//! previews for custom game items.
//!
//! This library provides functionality to:
//! - Scale a flat item template to any level
//! - Regroup a scaled template into the item plugin's configuration layout
//! - Render that layout as a YAML block
//! - Render a styled tooltip preview with inline color codes resolved
//! - Flatten YAML item templates into flat records and pick random base items
//!
//! ## Example
//!
//! ```
//! use itemgen::{generate, FlatItemRecord, Level, SerializerOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let record: FlatItemRecord = [
//!     ("ItemName", "Sword1"),
//!     ("Display", "&6Flame Blade"),
//!     ("MainHand_Damage", "10"),
//!     ("Enchantments", "DAMAGE_ALL:3"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let item = generate(&record, Level::new(3), &SerializerOptions::default())?;
//! assert_eq!(item.scaled.get("MainHand_Damage"), Some("12"));
//! println!("{}", item.yaml);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod document;
pub mod generate;
pub mod import;
pub mod lore;
pub mod number;
pub mod preview;
pub mod random;
pub mod record;
pub mod scale;
pub mod yaml;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{enchantment_name, slot_by_name, Slot, SLOTS, STATS};
#[doc(inline)]
pub use document::{to_document, NestedItemDocument, Scalar};
#[doc(inline)]
pub use generate::{generate, GenerateError, GeneratedItem};
#[doc(inline)]
pub use import::{flatten_templates, ImportError};
#[doc(inline)]
pub use lore::{faction_and_type, parse_lore, parse_rarity, LoreTags};
#[doc(inline)]
pub use preview::{
    format_enchantment_display, parse_markup, render_preview, PreviewLine, Span,
};
#[doc(inline)]
pub use random::{choose, facets, Facets, ItemFilter};
#[doc(inline)]
pub use record::{FieldKey, FlatItemRecord, Level, RecordError, SchemaVersion};
#[doc(inline)]
pub use scale::scale;
#[doc(inline)]
pub use yaml::{render, LineWrap, QuoteStyle, SerializeError, SerializerOptions};
