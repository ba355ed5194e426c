//! Free-Text Quantity Parsing
//!
//! ## Overview
//!
//! The one place user-typed text enters the engine. Input looks like
//! `"550nm"`, `"2.4 GHz"` or `"1.5eV"`: a numeric literal, optional
//! whitespace, optional unit suffix. The result is always in the quantity's
//! canonical unit.
//!
//! ## Leniency Contract
//!
//! Interactive input is wrong most of the time - the user is mid-keystroke.
//! The rules, in order:
//!
//! 1. A denylist rejects text containing pathological literals (`null`,
//!    `undefined`, `/`, `Infinity`, `NaN`) before any numeric parsing.
//!    Rust's float parser happily accepts `"inf"`; we never want it.
//! 2. The longest prefix that parses as a float is the numeric portion.
//!    No numeric portion, or one that is non-positive or non-finite,
//!    yields `None`.
//! 3. The remaining suffix resolves against the unit table. An *unknown*
//!    suffix is treated as the canonical unit, not rejected - typing is
//!    still in progress and a best-effort value beats an error state.
//!    The fallback is logged so a misconfigured caller is visible.

use super::UnitScale;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

/// Substrings that disqualify input before numeric parsing.
const DENYLIST: &[&str] = &["null", "undefined", "/", "Infinity", "NaN"];

/// Parse `"<number> [unit]"` text into a canonical-unit value.
///
/// Returns `None` for empty/denylisted text and for numeric portions that
/// are missing, non-positive or non-finite. Unknown unit suffixes fall back
/// to the canonical unit.
pub fn parse_quantity<U: UnitScale>(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    for needle in DENYLIST {
        if trimmed.contains(needle) {
            return None;
        }
    }

    let (number, suffix) = split_numeric_prefix(trimmed)?;
    if !number.is_finite() || number <= 0.0 {
        return None;
    }

    let unit = if suffix.is_empty() {
        U::CANONICAL
    } else {
        match U::from_symbol(suffix) {
            Ok(unit) => unit,
            Err(_) => {
                log_warn!(
                    "unknown {} unit suffix '{}', assuming {}",
                    U::KIND,
                    suffix,
                    U::CANONICAL.symbol()
                );
                U::CANONICAL
            }
        }
    };

    Some(number * unit.factor())
}

/// Split text into its longest parseable float prefix and the trimmed rest.
///
/// Longest-first probing means `"1.5eV"` splits as `1.5` + `"eV"` - the
/// float parser rejects the dangling-exponent `"1.5e"` before we ever try
/// the shorter prefix.
fn split_numeric_prefix(text: &str) -> Option<(f64, &str)> {
    for end in (1..=text.len()).rev() {
        if !text.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = text[..end].parse::<f64>() {
            return Some((value, text[end..].trim()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{EnergyUnit, FrequencyUnit, WavelengthUnit};

    #[test]
    fn plain_number_is_canonical() {
        assert_eq!(parse_quantity::<WavelengthUnit>("550"), Some(550.0));
    }

    #[test]
    fn suffixed_values() {
        let nm = parse_quantity::<WavelengthUnit>("550nm").unwrap();
        assert!((nm - 550e-9).abs() / 550e-9 < 1e-12);

        let ghz = parse_quantity::<FrequencyUnit>("2.4 GHz").unwrap();
        assert!((ghz - 2.4e9).abs() / 2.4e9 < 1e-12);

        let ev = parse_quantity::<EnergyUnit>("1.5eV").unwrap();
        assert!((ev - 1.5).abs() < 1e-12);
    }

    #[test]
    fn exponent_literals_parse() {
        assert_eq!(parse_quantity::<FrequencyUnit>("1e9"), Some(1e9));
        let khz = parse_quantity::<FrequencyUnit>("2e3 kHz").unwrap();
        assert!((khz - 2e6).abs() < 1e-6);
    }

    #[test]
    fn unknown_suffix_falls_back_to_canonical() {
        assert_eq!(parse_quantity::<WavelengthUnit>("10 cubits"), Some(10.0));
    }

    #[test]
    fn denylist_rejects() {
        assert_eq!(parse_quantity::<WavelengthUnit>("null"), None);
        assert_eq!(parse_quantity::<WavelengthUnit>("undefined"), None);
        assert_eq!(parse_quantity::<WavelengthUnit>("1/2"), None);
        assert_eq!(parse_quantity::<WavelengthUnit>("Infinity"), None);
        assert_eq!(parse_quantity::<WavelengthUnit>("NaN"), None);
    }

    #[test]
    fn lowercase_infinity_never_reaches_the_caller() {
        // "inf" parses as f64 infinity; the finiteness check absorbs it
        assert_eq!(parse_quantity::<WavelengthUnit>("inf"), None);
        assert_eq!(parse_quantity::<WavelengthUnit>("nan"), None);
    }

    #[test]
    fn non_positive_and_empty_rejected() {
        assert_eq!(parse_quantity::<EnergyUnit>(""), None);
        assert_eq!(parse_quantity::<EnergyUnit>("   "), None);
        assert_eq!(parse_quantity::<EnergyUnit>("0"), None);
        assert_eq!(parse_quantity::<EnergyUnit>("-1.5eV"), None);
        assert_eq!(parse_quantity::<EnergyUnit>("eV"), None);
    }
}
