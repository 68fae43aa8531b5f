//! YAML configuration output
//!
//! Renders a [`NestedItemDocument`] as a ready-to-paste item configuration
//! block:
//!
//! ```text
//! # Flame Blade (Level 3)
//! # Generated by Item Randomizer
//!
//! Sword1:
//!   Id: DIAMOND_SWORD
//!   Enchantments:
//!     - DAMAGE_ALL:4
//! ```
//!
//! Documents go through `serde_yaml::Value` and are written by a small block
//! emitter so the quote character for strings is selectable. Lines are never
//! folded. Plain scalars are only used when reading them back yields the same
//! string. Characters YAML cannot carry raw are written as double-quoted
//! escapes. Every block is parsed back before it is returned, so the output
//! always reads as the document it came from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::warn;

use crate::document::NestedItemDocument;
use crate::record::Level;

pub const HEADER_FOOTER: &str = "# Generated by Item Randomizer";

const INDENT: usize = 2;

/// Plain spellings that YAML 1.1 readers turn into booleans
const YAML11_BOOLS: &[&str] = &["y", "n", "yes", "no", "on", "off"];

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported value: {0}")]
    Unsupported(&'static str),

    #[error("rendered YAML does not read back as the document")]
    RoundTrip,
}

/// Quote character for strings that cannot be written plain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(QuoteStyle::Single),
            "double" => Ok(QuoteStyle::Double),
            other => Err(format!("Unknown quote style: {other} (expected single or double)")),
        }
    }
}

impl std::fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStyle::Single => write!(f, "single"),
            QuoteStyle::Double => write!(f, "double"),
        }
    }
}

/// Line wrapping mode. Output is never folded, so `off` is the only mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineWrap {
    #[default]
    Off,
}

/// Serializer settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializerOptions {
    #[serde(default)]
    pub line_wrap: LineWrap,
    #[serde(default)]
    pub quote_style: QuoteStyle,
}

/// Render the configuration block for one item.
///
/// Never fails: if the document cannot be written, a single `# Error ...`
/// line is returned in place of the block.
pub fn render(
    doc: &NestedItemDocument,
    item_name: &str,
    display_or_name: &str,
    level: Level,
    options: &SerializerOptions,
) -> String {
    or_diagnostic(
        try_render(doc, item_name, display_or_name, level, options),
        item_name,
    )
}

/// Render the configuration block, surfacing failures as errors
pub fn try_render(
    doc: &NestedItemDocument,
    item_name: &str,
    display_or_name: &str,
    level: Level,
    options: &SerializerOptions,
) -> Result<String, SerializeError> {
    let body = serde_yaml::to_value(doc)?;
    render_value(body, item_name, display_or_name, level, options)
}

fn render_value(
    body: Value,
    item_name: &str,
    display_or_name: &str,
    level: Level,
    options: &SerializerOptions,
) -> Result<String, SerializeError> {
    let mut root = Mapping::new();
    root.insert(Value::String(item_name.to_string()), body);

    let mut emitter = Emitter {
        out: String::new(),
        quote: options.quote_style,
    };
    emitter.mapping(&root, 0)?;

    if serde_yaml::from_str::<Value>(&emitter.out)? != Value::Mapping(root) {
        return Err(SerializeError::RoundTrip);
    }

    Ok(format!(
        "# {} (Level {})\n{}\n\n{}",
        single_line(display_or_name),
        level,
        HEADER_FOOTER,
        emitter.out
    ))
}

fn or_diagnostic(result: Result<String, SerializeError>, item_name: &str) -> String {
    result.unwrap_or_else(|e| {
        warn!(item = item_name, error = %e, "YAML rendering failed");
        format!("# Error generating YAML: {}", single_line(&e.to_string()))
    })
}

/// Text safe to place after `#` on one comment line
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if needs_escape(c) { ' ' } else { c })
        .collect()
}

/// Characters that cannot appear raw in a scalar or comment
fn needs_escape(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}'
        )
}

struct Emitter {
    out: String,
    quote: QuoteStyle,
}

impl Emitter {
    fn pad(&mut self, indent: usize) {
        self.out.extend(std::iter::repeat(' ').take(indent));
    }

    fn mapping(&mut self, map: &Mapping, indent: usize) -> Result<(), SerializeError> {
        for (key, value) in map {
            self.pad(indent);
            let key = self.scalar(key)?;
            self.out.push_str(&key);
            self.out.push(':');
            self.nested(value, indent)?;
        }
        Ok(())
    }

    fn sequence(&mut self, seq: &[Value], indent: usize) -> Result<(), SerializeError> {
        for item in seq {
            self.pad(indent);
            self.out.push('-');
            match item {
                Value::Mapping(m) if !m.is_empty() => {
                    // First entry shares the dash line
                    self.out.push(' ');
                    let mut inner = Emitter {
                        out: String::new(),
                        quote: self.quote,
                    };
                    inner.mapping(m, indent + INDENT)?;
                    self.out.push_str(inner.out.trim_start_matches(' '));
                }
                Value::Sequence(s) if !s.is_empty() => {
                    self.out.push('\n');
                    self.sequence(s, indent + INDENT)?;
                }
                other => {
                    self.out.push(' ');
                    let text = self.inline(other)?;
                    self.out.push_str(&text);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    /// Value following `key:`
    fn nested(&mut self, value: &Value, indent: usize) -> Result<(), SerializeError> {
        match value {
            Value::Mapping(m) if !m.is_empty() => {
                self.out.push('\n');
                self.mapping(m, indent + INDENT)
            }
            Value::Sequence(s) if !s.is_empty() => {
                self.out.push('\n');
                self.sequence(s, indent + INDENT)
            }
            other => {
                self.out.push(' ');
                let text = self.inline(other)?;
                self.out.push_str(&text);
                self.out.push('\n');
                Ok(())
            }
        }
    }

    /// Scalars and empty collections
    fn inline(&self, value: &Value) -> Result<String, SerializeError> {
        match value {
            Value::Mapping(_) => Ok("{}".to_string()),
            Value::Sequence(_) => Ok("[]".to_string()),
            other => self.scalar(other),
        }
    }

    fn scalar(&self, value: &Value) -> Result<String, SerializeError> {
        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => self.string(s),
            Value::Tagged(_) => Err(SerializeError::Unsupported("tagged value")),
            Value::Mapping(_) | Value::Sequence(_) => {
                Err(SerializeError::Unsupported("collection used as a key"))
            }
        }
    }

    fn string(&self, s: &str) -> Result<String, SerializeError> {
        if is_plain_safe(s) {
            return Ok(s.to_string());
        }
        match self.quote {
            QuoteStyle::Single if !s.chars().any(needs_escape) => {
                Ok(format!("'{}'", s.replace('\'', "''")))
            }
            _ => Ok(double_quoted(s)),
        }
    }
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if needs_escape(c) && u32::from(c) <= 0xff => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if needs_escape(c) => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `s` can be written without quotes and still read back as `s`
fn is_plain_safe(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    if s.trim() != s
        || "-?:,[]{}#&*!|>'\"%@`".contains(first)
        || s.chars().any(needs_escape)
        || s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
        || YAML11_BOOLS.contains(&s.to_ascii_lowercase().as_str())
    {
        return false;
    }
    matches!(serde_yaml::from_str::<Value>(s), Ok(Value::String(ref parsed)) if parsed == s)
}
