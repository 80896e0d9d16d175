//! Legacy-compatible token rendering.
//!
//! The format always uses `.` as the decimal separator and never a
//! thousands separator. Rust's `Display` for integers and floats is
//! locale-independent and prints whole floats without a fractional
//! part ("2", not "2.0"), matching the invariant-culture output the
//! format expects, so numeric values go through `Display` directly.
//! Everything else that needs a fixed token lives here.

/// Render a boolean as the legacy "1"/"0" token.
pub fn bool_flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Render a custom sample suffix; empty means the literal `0`.
pub fn suffix_token(suffix: &str) -> &str {
    if suffix.is_empty() { "0" } else { suffix }
}

/// Comma-join a list of integers (bookmark lines).
pub fn join_csv(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_flag() {
        assert_eq!(bool_flag(true), "1");
        assert_eq!(bool_flag(false), "0");
    }

    #[test]
    fn test_suffix_token() {
        assert_eq!(suffix_token(""), "0");
        assert_eq!(suffix_token("3"), "3");
    }

    #[test]
    fn test_join_csv() {
        assert_eq!(join_csv(&[]), "");
        assert_eq!(join_csv(&[1000]), "1000");
        assert_eq!(join_csv(&[1000, 2000, 3000]), "1000,2000,3000");
    }

    #[test]
    fn test_float_display_is_legacy_compatible() {
        assert_eq!(format!("{}", 2.0_f64), "2");
        assert_eq!(format!("{}", -50.0_f64), "-50");
        assert_eq!(format!("{}", 0.7_f32), "0.7");
        assert_eq!(format!("{}", 1000.0_f64), "1000");
    }
}
