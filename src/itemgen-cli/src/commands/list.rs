//! List command handler

use anyhow::Result;
use itemgen::catalog::rarity_by_name;
use itemgen::{facets, parse_rarity, FlatItemRecord, Facets};

/// One `name  display  rarity` row per item
pub fn item_rows(records: &[FlatItemRecord]) -> Vec<String> {
    let width = records
        .iter()
        .filter_map(FlatItemRecord::item_name)
        .map(str::len)
        .max()
        .unwrap_or(0);

    records
        .iter()
        .filter_map(|record| {
            let name = record.item_name()?;
            let display = record.get("Display").map(itemgen::preview::strip_markup);
            // Unknown tier names fall back to the display color
            let rarity = record
                .get("Rarity")
                .and_then(rarity_by_name)
                .or_else(|| record.get("Display").and_then(parse_rarity))
                .map(|r| r.name);
            let mut row = format!("{:<width$}", name, width = width);
            if let Some(display) = display {
                row.push_str(&format!("  {}", display));
            }
            if let Some(rarity) = rarity {
                row.push_str(&format!("  ({})", rarity));
            }
            Some(row.trim_end().to_string())
        })
        .collect()
}

fn print_facets(facets: &Facets) {
    println!("Factions:");
    for faction in &facets.factions {
        println!("  {}", faction);
    }
    println!("Types:");
    for item_type in &facets.item_types {
        println!("  {}", item_type);
    }
}

/// Handle the list command
pub fn handle(records: &[FlatItemRecord], show_facets: bool) -> Result<()> {
    if show_facets {
        print_facets(&facets(records));
        return Ok(());
    }

    for row in item_rows(records) {
        println!("{}", row);
    }
    println!();
    println!("{} items", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_rows() {
        let records: Vec<FlatItemRecord> = vec![
            [("ItemName", "Sword1"), ("Display", "&6&lFlame Blade")]
                .into_iter()
                .collect(),
            [("ItemName", "Bow"), ("Rarity", "rare")].into_iter().collect(),
            [("ItemName", "Axe"), ("Rarity", "Mythic"), ("Display", "&5Axe")]
                .into_iter()
                .collect(),
        ];
        assert_eq!(
            item_rows(&records),
            vec![
                "Sword1  Flame Blade  (Legendary)",
                "Bow     (Rare)",
                "Axe     Axe  (Epic)",
            ]
        );
    }
}
