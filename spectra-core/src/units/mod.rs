//! Unit Tables for the Three Spectrum Quantities
//!
//! ## Overview
//!
//! Every physical value in this crate lives in one of three quantity kinds,
//! each centered on a canonical unit:
//!
//! - **Wavelength** - meters
//! - **Frequency** - hertz
//! - **Energy** - electron-volts
//!
//! Units arrive from the outside world as free-form text, but inside the
//! engine each quantity kind's units are a closed enumeration. The only
//! place text meets the type system is [`UnitScale::from_symbol`] - the
//! single boundary adapter the parsers and the symbol-based conversion
//! API go through.
//!
//! ## Conversion Model
//!
//! Every unit carries one multiplicative factor to its canonical unit, so a
//! conversion is a single multiply and divide:
//!
//! ```text
//! canonical = value * factor(from)
//! result    = canonical / factor(to)
//! ```
//!
//! No rounding, no intermediate formatting. Conversion is linear and
//! deliberately sign-agnostic: physical plausibility of the magnitude is
//! the caller's concern (see [`photon`](crate::photon)), not the table's.
//!
//! ## Best-Unit Selection
//!
//! [`best_unit`] picks the unit a human would write a magnitude in: the
//! largest unit whose factor the absolute value meets or exceeds. The
//! threshold table is the unit table itself, ordered descending by factor.
//! Values below the smallest factor fall back to the canonical unit rather
//! than erroring - the formatting layer renders those in scientific
//! notation.

mod energy;
mod frequency;
mod parse;
mod wavelength;

pub use energy::EnergyUnit;
pub use frequency::FrequencyUnit;
pub use parse::parse_quantity;
pub use wavelength::WavelengthUnit;

use core::fmt;

use crate::errors::{UnitError, UnitResult};

/// The three quantity kinds the spectrum engine works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantityKind {
    /// Spatial period of the wave; canonical unit meters.
    Wavelength,
    /// Oscillations per second; canonical unit hertz.
    Frequency,
    /// Energy of a single photon; canonical unit electron-volts.
    Energy,
}

impl QuantityKind {
    /// Human-readable name, lowercase, as used in error and invalid-value
    /// messages ("Invalid wavelength").
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Wavelength => "wavelength",
            Self::Frequency => "frequency",
            Self::Energy => "energy",
        }
    }

    /// Symbol of the canonical unit conversions are centered on.
    pub fn canonical_symbol(self) -> &'static str {
        match self {
            Self::Wavelength => "m",
            Self::Frequency => "Hz",
            Self::Energy => "eV",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One unit family: a closed set of symbols with factors to a canonical unit.
///
/// Implementations guarantee:
/// - every factor is strictly positive and finite
/// - exactly one unit (the canonical one) has factor 1.0
/// - [`UnitScale::ALL`] is ordered descending by factor, which makes it
///   double as the best-unit threshold table
pub trait UnitScale: Copy + PartialEq + Sized + 'static {
    /// Quantity kind this family measures.
    const KIND: QuantityKind;

    /// The unit with factor exactly 1.0.
    const CANONICAL: Self;

    /// Every unit in the family, ordered descending by factor.
    const ALL: &'static [Self];

    /// Multiplicative factor from this unit to the canonical unit.
    fn factor(self) -> f64;

    /// Short symbol as rendered after a value ("nm", "GHz", "keV").
    fn symbol(self) -> &'static str;

    /// Spelled-out name ("nanometers").
    fn display_name(self) -> &'static str;

    /// Alternate spellings accepted on input, e.g. "um" for "µm".
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Resolve a symbol against this family's table.
    ///
    /// Exact matches win first so that case-distinct symbols (`meV` vs
    /// `MeV`) resolve correctly; after that, matching is ASCII
    /// case-insensitive in table order. Unknown symbols raise
    /// [`UnitError::UnknownUnit`] - a typo in a call site, not user input.
    fn from_symbol(text: &str) -> UnitResult<Self> {
        let wanted = text.trim();
        for &unit in Self::ALL {
            if unit.symbol() == wanted {
                return Ok(unit);
            }
        }
        for &unit in Self::ALL {
            if unit.symbol().eq_ignore_ascii_case(wanted) {
                return Ok(unit);
            }
            for alias in unit.aliases() {
                if alias.eq_ignore_ascii_case(wanted) {
                    return Ok(unit);
                }
            }
        }
        Err(UnitError::unknown_unit(wanted, Self::KIND))
    }
}

/// Convert a value between two units of the same family.
///
/// Linear, unit-agnostic about sign, no rounding beyond IEEE-754. Zero and
/// negative values pass through unchanged in meaning; validating physical
/// plausibility is the caller's responsibility.
pub fn convert<U: UnitScale>(value: f64, from: U, to: U) -> f64 {
    value * from.factor() / to.factor()
}

/// Convert between two units named by symbol.
///
/// The boundary-adapter form of [`convert`]: both symbols are resolved via
/// [`UnitScale::from_symbol`] and an unknown symbol raises
/// [`UnitError::UnknownUnit`] identifying it.
pub fn convert_symbols<U: UnitScale>(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    let from = U::from_symbol(from)?;
    let to = U::from_symbol(to)?;
    Ok(convert(value, from, to))
}

/// Rescale a canonical value into the most human-readable unit.
///
/// Returns the rescaled value and the chosen unit. Magnitudes below the
/// smallest factor in the table fall back to the canonical unit.
pub fn best_unit<U: UnitScale>(canonical: f64) -> (f64, U) {
    let magnitude = canonical.abs();
    for &unit in U::ALL {
        if magnitude >= unit.factor() {
            return (canonical / unit.factor(), unit);
        }
    }
    (canonical, U::CANONICAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_are_positive_with_one_canonical() {
        fn check<U: UnitScale + core::fmt::Debug>() {
            let mut canonical_count = 0;
            let mut previous = f64::INFINITY;
            for &unit in U::ALL {
                assert!(unit.factor() > 0.0, "{unit:?} factor not positive");
                assert!(unit.factor() < previous, "{unit:?} out of descending order");
                previous = unit.factor();
                if unit.factor() == 1.0 {
                    canonical_count += 1;
                }
            }
            assert_eq!(canonical_count, 1);
            assert_eq!(U::CANONICAL.factor(), 1.0);
        }
        check::<WavelengthUnit>();
        check::<FrequencyUnit>();
        check::<EnergyUnit>();
    }

    #[test]
    fn convert_is_a_single_multiply_divide() {
        let result = convert(500.0, WavelengthUnit::Nanometers, WavelengthUnit::Meters);
        assert_eq!(result, 500.0 * 1e-9);

        // Same-unit conversion is the identity
        assert_eq!(convert(2.4, FrequencyUnit::Gigahertz, FrequencyUnit::Gigahertz), 2.4);
    }

    #[test]
    fn convert_accepts_zero_and_negative() {
        assert_eq!(convert(0.0, WavelengthUnit::Nanometers, WavelengthUnit::Meters), 0.0);
        assert_eq!(convert(-3.0, EnergyUnit::KiloElectronVolts, EnergyUnit::ElectronVolts), -3000.0);
    }

    #[test]
    fn convert_symbols_rejects_unknown() {
        let err = convert_symbols::<WavelengthUnit>(1.0, "nm", "parsecs").unwrap_err();
        let UnitError::UnknownUnit { symbol, kind } = err;
        assert_eq!(symbol.as_str(), "parsecs");
        assert_eq!(kind, QuantityKind::Wavelength);

        let ok = convert_symbols::<WavelengthUnit>(500.0, "nm", "m").unwrap();
        assert_eq!(ok, 500.0 * 1e-9);
    }

    #[test]
    fn best_unit_picks_largest_met_threshold() {
        let (value, unit) = best_unit::<WavelengthUnit>(550e-9);
        assert_eq!(unit, WavelengthUnit::Nanometers);
        assert!((value - 550.0).abs() < 1e-9);

        let (value, unit) = best_unit::<FrequencyUnit>(2.4e9);
        assert_eq!(unit, FrequencyUnit::Gigahertz);
        assert!((value - 2.4).abs() < 1e-12);
    }

    #[test]
    fn best_unit_falls_back_to_canonical() {
        // Below the femtometer threshold: canonical meters, not an error
        let (value, unit) = best_unit::<WavelengthUnit>(1e-18);
        assert_eq!(unit, WavelengthUnit::Meters);
        assert_eq!(value, 1e-18);
    }
}
