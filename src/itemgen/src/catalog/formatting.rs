//! Inline formatting codes (`&6`, `&l`, ...) used in names and lore

/// What a formatting code does to the text that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Sets the text color and clears active formatting flags
    Color,
    /// Adds a formatting flag (bold, italic, ...)
    Format,
    /// Clears color and formatting
    Reset,
}

/// Formatting code information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCode {
    pub code: char,
    pub class: &'static str,
    pub kind: FormatKind,
    /// ANSI SGR parameters for terminal rendering
    pub ansi: &'static str,
}

const fn color(code: char, class: &'static str, ansi: &'static str) -> FormatCode {
    FormatCode {
        code,
        class,
        kind: FormatKind::Color,
        ansi,
    }
}

const fn flag(code: char, class: &'static str, ansi: &'static str) -> FormatCode {
    FormatCode {
        code,
        class,
        kind: FormatKind::Format,
        ansi,
    }
}

/// All formatting codes
pub const FORMAT_CODES: &[FormatCode] = &[
    color('0', "mc-black", "30"),
    color('1', "mc-dark-blue", "34"),
    color('2', "mc-dark-green", "32"),
    color('3', "mc-dark-aqua", "36"),
    color('4', "mc-dark-red", "31"),
    color('5', "mc-dark-purple", "35"),
    color('6', "mc-gold", "33"),
    color('7', "mc-gray", "37"),
    color('8', "mc-dark-gray", "90"),
    color('9', "mc-blue", "94"),
    color('a', "mc-green", "92"),
    color('b', "mc-aqua", "96"),
    color('c', "mc-red", "91"),
    color('d', "mc-light-purple", "95"),
    color('e', "mc-yellow", "93"),
    color('f', "mc-white", "97"),
    flag('k', "mc-obfuscated", "8"),
    flag('l', "mc-bold", "1"),
    flag('m', "mc-strikethrough", "9"),
    flag('n', "mc-underline", "4"),
    flag('o', "mc-italic", "3"),
    FormatCode {
        code: 'r',
        class: "mc-reset",
        kind: FormatKind::Reset,
        ansi: "0",
    },
];

/// Look up a formatting code (case-insensitive)
pub fn format_code(code: char) -> Option<&'static FormatCode> {
    let code = code.to_ascii_lowercase();
    FORMAT_CODES.iter().find(|f| f.code == code)
}

/// Look up a formatting code by its style class (`mc-gold`)
pub fn format_code_by_class(class: &str) -> Option<&'static FormatCode> {
    FORMAT_CODES.iter().find(|f| f.class == class)
}
