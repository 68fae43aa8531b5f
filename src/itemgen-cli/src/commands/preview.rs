//! Preview command handler
//!
//! Prints the tooltip preview of an item, either as ANSI-colored text or as
//! the JSON line structure the browser front end renders.

use anyhow::{Context, Result};
use itemgen::catalog::format_code_by_class;
use itemgen::{render_preview, scale, FlatItemRecord, Level, PreviewLine};

use crate::records;

const ANSI_RESET: &str = "\x1b[0m";

/// Terminal rendering of one preview row
pub fn ansi_line(line: &PreviewLine) -> String {
    let mut out = String::new();
    for span in &line.spans {
        let codes: Vec<&str> = span
            .classes
            .iter()
            .filter_map(|class| format_code_by_class(class))
            .map(|code| code.ansi)
            .collect();
        if codes.is_empty() {
            out.push_str(&span.text);
        } else {
            out.push_str(&format!("\x1b[{}m{}{}", codes.join(";"), span.text, ANSI_RESET));
        }
    }
    out
}

pub fn render(record: &FlatItemRecord, level: Level) -> Vec<PreviewLine> {
    render_preview(&scale(record, level), level)
}

/// Handle the preview command
pub fn handle(records: &[FlatItemRecord], item: &str, level: Level, json: bool) -> Result<()> {
    let record = records::find(records, item)?;
    let lines = render(record, level);

    if json {
        let text = serde_json::to_string_pretty(&lines).context("Failed to serialize preview")?;
        println!("{}", text);
        return Ok(());
    }

    for line in &lines {
        println!("{}", ansi_line(line));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_line() {
        let line = PreviewLine::markup("&6&lGold&r plain", &["preview-title"]);
        assert_eq!(ansi_line(&line), "\x1b[33;1mGold\x1b[0m plain");
    }

    #[test]
    fn test_unstyled_line_has_no_escapes() {
        let line = PreviewLine::plain("[Level 3]", &["preview-tag"]);
        assert_eq!(ansi_line(&line), "[Level 3]");
    }

    #[test]
    fn test_render_scales_first() {
        let record: FlatItemRecord = [
            ("ItemName", "Sword1"),
            ("Enchantments", "DAMAGE_ALL:3"),
            ("MainHand_Damage", "10"),
        ]
        .into_iter()
        .collect();
        let texts: Vec<String> = render(&record, Level::new(3))
            .iter()
            .map(PreviewLine::text)
            .collect();
        assert!(texts.contains(&"Sharpness IV".to_string()));
        assert!(texts.contains(&" +12 Damage".to_string()));
    }
}
