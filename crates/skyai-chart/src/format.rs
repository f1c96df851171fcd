// File: crates/skyai-chart/src/format.rs
// Summary: Number-to-text helpers for readouts, footers and SVG coordinates.

/// Shortest round-trip text for a value (`22.0` -> `"22"`, `22.5` -> `"22.5"`).
pub fn value(v: f64) -> String {
    if v == 0.0 {
        // folds -0.0
        return "0".to_string();
    }
    format!("{v}")
}

/// Value followed by its unit suffix, verbatim (`"22.5°C"`, `"800 lux"`).
pub fn with_unit(v: f64, unit: &str) -> String {
    format!("{}{}", value(v), unit)
}

/// Fixed one-decimal text used for averages.
pub fn one_decimal(v: f64) -> String {
    let s = format!("{v:.1}");
    if s == "-0.0" { "0.0".to_string() } else { s }
}

/// Compact coordinate text: at most three decimals, trailing zeros trimmed.
pub fn coord(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_print_like_the_dashboard() {
        assert_eq!(value(22.0), "22");
        assert_eq!(value(20.1), "20.1");
        assert_eq!(value(-0.0), "0");
        assert_eq!(with_unit(850.0, " lux"), "850 lux");
    }

    #[test]
    fn coordinates_are_trimmed() {
        assert_eq!(coord(40.0), "40");
        assert_eq!(coord(101.290322), "101.29");
        assert_eq!(coord(-0.0001), "0");
        assert_eq!(one_decimal(23.14), "23.1");
    }
}
