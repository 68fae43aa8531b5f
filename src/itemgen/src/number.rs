//! Lenient numeric coercion shared by the scaler, structurer, and preview

/// Parse a cell as a finite float, ignoring surrounding whitespace.
///
/// Returns `None` for anything with a suffix (`"+30%"`), empty cells, and
/// the non-finite spellings Rust would otherwise accept (`"NaN"`, `"inf"`).
pub fn parse_finite(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse a cell as an integer, ignoring surrounding whitespace
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Round half toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to two decimal places, halves toward positive infinity
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Shortest decimal representation that parses back to the same value.
///
/// Integral values have no fractional part (`12`, not `12.0`) and negative
/// zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Whether `value` survives a parse → format round trip unchanged.
///
/// `"12"` and `"12.5"` do; `"12.0"`, `"012"`, and `"+30%"` do not.
pub fn is_canonical_number(value: &str) -> bool {
    let trimmed = value.trim();
    parse_finite(trimmed).is_some_and(|v| format_number(v) == trimmed)
}
