//! Display formatting for animated statistics.
//!
//! One policy everywhere: compact suffixes. Millions render with one decimal
//! and `M+`, thousands round to a whole number with `K+`, smaller values get
//! a bare `+`. Halves round away from zero.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a counter value, e.g. `2_500_000` -> `"2.5M+"`, `1_500` -> `"2K+"`.
#[allow(clippy::cast_precision_loss)]
pub fn compact_count(value: u64) -> String {
    if value >= 1_000_000 {
        let millions = (value as f64 / 100_000.0).round() / 10.0;
        format!("{millions:.1}M+")
    } else if value >= 1_000 {
        let thousands = (value as f64 / 1_000.0).round();
        format!("{thousands:.0}K+")
    } else {
        format!("{value}+")
    }
}
