//! Inline color/format code parsing
//!
//! `&` (or `§`) followed by a known code toggles style for the text after it.
//! The markers are removed from the visible text and every run of text
//! becomes a [`Span`] carrying the classes of the codes active at that point.

use serde::Serialize;

use crate::catalog::{format_code, FormatCode, FormatKind};

const MARKERS: [char; 2] = ['&', '§'];

/// A run of text with the style classes that apply to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    pub classes: Vec<&'static str>,
    pub text: String,
}

impl Span {
    pub fn new(classes: Vec<&'static str>, text: impl Into<String>) -> Self {
        Span {
            classes,
            text: text.into(),
        }
    }
}

#[derive(Default)]
struct StyleState {
    color: Option<&'static FormatCode>,
    flags: Vec<&'static FormatCode>,
}

impl StyleState {
    fn apply(&mut self, code: &'static FormatCode) {
        match code.kind {
            FormatKind::Color => {
                self.color = Some(code);
                self.flags.clear();
            }
            FormatKind::Format => {
                if !self.flags.iter().any(|f| f.code == code.code) {
                    self.flags.push(code);
                }
            }
            FormatKind::Reset => {
                self.color = None;
                self.flags.clear();
            }
        }
    }

    fn classes(&self) -> Vec<&'static str> {
        self.color
            .iter()
            .chain(self.flags.iter())
            .map(|c| c.class)
            .collect()
    }
}

/// Split a line into styled spans.
///
/// Always returns at least one span, so blank and marker-only lines still
/// occupy a row.
pub fn parse_markup(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut state = StyleState::default();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if MARKERS.contains(&c) {
            if let Some(code) = chars.peek().copied().and_then(format_code) {
                chars.next();
                if !current.is_empty() {
                    spans.push(Span::new(state.classes(), std::mem::take(&mut current)));
                }
                state.apply(code);
                continue;
            }
        }
        current.push(c);
    }

    if !current.is_empty() || spans.is_empty() {
        spans.push(Span::new(state.classes(), current));
    }
    spans
}

/// Visible text of a line with all recognized codes removed
pub fn strip_markup(text: &str) -> String {
    parse_markup(text).into_iter().map(|s| s.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_markup("Sword"), vec![Span::new(vec![], "Sword")]);
    }

    #[test]
    fn test_codes_attach_classes() {
        assert_eq!(
            parse_markup("&6&lFlame Blade"),
            vec![Span::new(vec!["mc-gold", "mc-bold"], "Flame Blade")]
        );
    }

    #[test]
    fn test_color_resets_flags() {
        assert_eq!(
            parse_markup("&lBold&cRed"),
            vec![
                Span::new(vec!["mc-bold"], "Bold"),
                Span::new(vec!["mc-red"], "Red"),
            ]
        );
    }

    #[test]
    fn test_reset_code() {
        assert_eq!(
            parse_markup("&a&oGreen&r plain"),
            vec![
                Span::new(vec!["mc-green", "mc-italic"], "Green"),
                Span::new(vec![], " plain"),
            ]
        );
    }

    #[test]
    fn test_section_sign_marker() {
        assert_eq!(strip_markup("§bAqua"), "Aqua");
    }

    #[test]
    fn test_unknown_codes_are_literal() {
        assert_eq!(strip_markup("Fish & Chips &z"), "Fish & Chips &z");
        assert_eq!(strip_markup("trailing &"), "trailing &");
    }

    #[test]
    fn test_blank_lines_keep_a_row() {
        assert_eq!(parse_markup(""), vec![Span::default()]);
        assert_eq!(parse_markup("&7"), vec![Span::new(vec!["mc-gray"], "")]);
    }
}
