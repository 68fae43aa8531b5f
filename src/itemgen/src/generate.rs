//! One-shot item generation: scale, structure, serialize and preview

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::document::{to_document, NestedItemDocument};
use crate::preview::{render_preview, PreviewLine};
use crate::record::{FlatItemRecord, Level, RecordError};
use crate::scale::scale;
use crate::yaml::{render, SerializerOptions};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot generate item: {0}")]
    Record(#[from] RecordError),
}

/// Every view of one generated item
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedItem {
    pub level: u32,
    pub scaled: FlatItemRecord,
    pub document: NestedItemDocument,
    pub yaml: String,
    pub preview: Vec<PreviewLine>,
}

/// Generate an item from its base template at `level`.
///
/// Both views are derived from the same scaled record; the source is left
/// untouched.
pub fn generate(
    record: &FlatItemRecord,
    level: Level,
    options: &SerializerOptions,
) -> Result<GeneratedItem, GenerateError> {
    record.ensure_eligible()?;

    let scaled = scale(record, level);
    let document = to_document(&scaled);
    let item_name = scaled.item_name().unwrap_or_default();
    let yaml = render(&document, item_name, scaled.display_or_name(), level, options);
    let preview = render_preview(&scaled, level);

    debug!(item = item_name, %level, "Generated item");

    Ok(GeneratedItem {
        level: level.get(),
        scaled,
        document,
        yaml,
        preview,
    })
}
