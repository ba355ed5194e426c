//! Photon Relations
//!
//! ## Overview
//!
//! The six pairwise conversions among the three ways of naming a point on
//! the electromagnetic spectrum, all over canonical units (meters, hertz,
//! electron-volts):
//!
//! ```text
//! f = c / λ        E = h_eV · f        E = h_eV · c / λ
//! λ = c / f        f = E / h_eV        λ = h_eV · c / E
//! ```
//!
//! Each pair is an exact algebraic inverse, so round-tripping a value
//! reproduces it to floating-point precision - a property the tests pin
//! down rather than assume.
//!
//! ## Input Contract
//!
//! Every conversion takes a finite, strictly positive number. Anything else
//! (zero, negative, NaN, infinities) returns `None`. Interactive callers
//! feed these functions on every keystroke; a half-typed value must degrade
//! to a neutral display state, never crash the page. The `Option` makes the
//! "no result" case a type the caller has to handle, instead of a NaN bit
//! pattern it has to remember to test.
//!
//! ## Formatting and Parsing
//!
//! The `format_*` functions render a canonical value in the unit a human
//! would choose ([`best_unit`]) with a fixed precision; the `parse_*`
//! functions are thin wrappers over [`parse_quantity`] returning canonical
//! values. Both live here rather than in a UI crate because the bracket
//! tables are domain knowledge: what counts as a "natural" unit depends on
//! where the value sits in the spectrum.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::constants::display::DEFAULT_DECIMAL_PLACES;
use crate::constants::physics::{PLANCK_CONSTANT_EV_S, SPEED_OF_LIGHT_M_PER_S};
use crate::units::{
    best_unit, parse_quantity, EnergyUnit, FrequencyUnit, UnitScale, WavelengthUnit,
};

/// Gate a conversion input: finite and strictly positive, or nothing.
fn positive_finite(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Frequency (Hz) of a photon with the given wavelength (m).
pub fn wavelength_to_frequency(meters: f64) -> Option<f64> {
    positive_finite(meters).map(|m| SPEED_OF_LIGHT_M_PER_S / m)
}

/// Wavelength (m) of a photon with the given frequency (Hz).
pub fn frequency_to_wavelength(hertz: f64) -> Option<f64> {
    positive_finite(hertz).map(|f| SPEED_OF_LIGHT_M_PER_S / f)
}

/// Photon energy (eV) at the given frequency (Hz).
pub fn frequency_to_energy_ev(hertz: f64) -> Option<f64> {
    positive_finite(hertz).map(|f| PLANCK_CONSTANT_EV_S * f)
}

/// Frequency (Hz) of a photon with the given energy (eV).
pub fn energy_ev_to_frequency(ev: f64) -> Option<f64> {
    positive_finite(ev).map(|e| e / PLANCK_CONSTANT_EV_S)
}

/// Photon energy (eV) at the given wavelength (m).
pub fn wavelength_to_energy_ev(meters: f64) -> Option<f64> {
    positive_finite(meters).map(|m| PLANCK_CONSTANT_EV_S * SPEED_OF_LIGHT_M_PER_S / m)
}

/// Wavelength (m) of a photon with the given energy (eV).
pub fn energy_ev_to_wavelength(ev: f64) -> Option<f64> {
    positive_finite(ev).map(|e| PLANCK_CONSTANT_EV_S * SPEED_OF_LIGHT_M_PER_S / e)
}

/// Render a canonical value in its best unit, or fall back.
///
/// Outside `[smallest table factor, exponential_above)` the value renders
/// in scientific notation in the canonical unit; invalid input renders as
/// `"Invalid <quantity>"`.
fn format_quantity<U: UnitScale>(canonical: f64, exponential_above: f64) -> String {
    if positive_finite(canonical).is_none() {
        return format!("Invalid {}", U::KIND);
    }

    let smallest = U::ALL[U::ALL.len() - 1].factor();
    if canonical < smallest || canonical >= exponential_above {
        return format!(
            "{:.prec$e} {}",
            canonical,
            U::KIND.canonical_symbol(),
            prec = DEFAULT_DECIMAL_PLACES as usize
        );
    }

    let (value, unit) = best_unit::<U>(canonical);
    format!(
        "{:.prec$} {}",
        value,
        unit.symbol(),
        prec = DEFAULT_DECIMAL_PLACES as usize
    )
}

/// Human-readable rendering of a wavelength in meters.
///
/// Brackets: km, m, cm, mm, µm, nm, pm, fm, two decimal digits each;
/// scientific notation below 1 fm and at or above 1e6 m.
pub fn format_wavelength(meters: f64) -> String {
    format_quantity::<WavelengthUnit>(meters, 1e6)
}

/// Human-readable rendering of a frequency in hertz.
///
/// Brackets: EHz down to Hz, two decimal digits each; scientific notation
/// below 1 Hz and at or above 1e21 Hz.
pub fn format_frequency(hertz: f64) -> String {
    format_quantity::<FrequencyUnit>(hertz, 1e21)
}

/// Human-readable rendering of a photon energy in electron-volts.
///
/// Brackets: TeV down to µeV, two decimal digits each; scientific notation
/// below 1 µeV and at or above 1e15 eV.
pub fn format_energy(ev: f64) -> String {
    format_quantity::<EnergyUnit>(ev, 1e15)
}

/// Parse free text like `"550nm"` into a wavelength in meters.
pub fn parse_wavelength(text: &str) -> Option<f64> {
    parse_quantity::<WavelengthUnit>(text)
}

/// Parse free text like `"2.4 GHz"` into a frequency in hertz.
pub fn parse_frequency(text: &str) -> Option<f64> {
    parse_quantity::<FrequencyUnit>(text)
}

/// Parse free text like `"1.5eV"` into an energy in electron-volts.
pub fn parse_energy(text: &str) -> Option<f64> {
    parse_quantity::<EnergyUnit>(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Positive floats spread log-uniformly across the catalog's decades.
    fn spectrum_value() -> impl Strategy<Value = f64> {
        (1.0f64..10.0, -18i32..7).prop_map(|(mantissa, exponent)| mantissa * 10f64.powi(exponent))
    }

    #[test]
    fn green_light_relations() {
        let lambda = 550e-9;
        let f = wavelength_to_frequency(lambda).unwrap();
        let e = wavelength_to_energy_ev(lambda).unwrap();
        assert!((f - 5.45e14).abs() / 5.45e14 < 1e-2, "f = {f}");
        assert!((e - 2.25).abs() / 2.25 < 1e-2, "e = {e}");
    }

    #[test]
    fn invalid_magnitudes_yield_none() {
        for bad in [0.0, -1.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(wavelength_to_frequency(bad), None);
            assert_eq!(frequency_to_wavelength(bad), None);
            assert_eq!(frequency_to_energy_ev(bad), None);
            assert_eq!(energy_ev_to_frequency(bad), None);
            assert_eq!(wavelength_to_energy_ev(bad), None);
            assert_eq!(energy_ev_to_wavelength(bad), None);
        }
    }

    #[test]
    fn formatting_picks_natural_units() {
        assert_eq!(format_wavelength(550e-9), "550.00 nm");
        assert_eq!(format_frequency(1e9), "1.00 GHz");
        assert_eq!(format_energy(1000.0), "1.00 keV");
    }

    #[test]
    fn formatting_invalid_input() {
        assert_eq!(format_wavelength(f64::NAN), "Invalid wavelength");
        assert_eq!(format_frequency(-1.0), "Invalid frequency");
        assert_eq!(format_energy(0.0), "Invalid energy");
    }

    #[test]
    fn formatting_out_of_bracket_goes_exponential() {
        let tiny = format_wavelength(1e-18);
        assert!(tiny.contains('e') && tiny.ends_with(" m"), "{tiny}");
        let huge = format_frequency(1e22);
        assert!(huge.contains('e') && huge.ends_with(" Hz"), "{huge}");
    }

    #[test]
    fn parse_wrappers_return_canonical_values() {
        let nm = parse_wavelength("550nm").unwrap();
        assert!((nm - 550e-9).abs() / 550e-9 < 1e-12);
        assert_eq!(parse_frequency("garbage"), None);
        let ev = parse_energy("2.25 eV").unwrap();
        assert!((ev - 2.25).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn wavelength_frequency_round_trip(lambda in spectrum_value()) {
            let back = frequency_to_wavelength(wavelength_to_frequency(lambda).unwrap()).unwrap();
            prop_assert!((back - lambda).abs() / lambda < 1e-10);
        }

        #[test]
        fn energy_round_trip(lambda in spectrum_value()) {
            let back = energy_ev_to_wavelength(wavelength_to_energy_ev(lambda).unwrap()).unwrap();
            prop_assert!((back - lambda).abs() / lambda < 1e-10);
        }

        #[test]
        fn energy_via_frequency_agrees(lambda in spectrum_value()) {
            let direct = wavelength_to_energy_ev(lambda).unwrap();
            let via_f = frequency_to_energy_ev(wavelength_to_frequency(lambda).unwrap()).unwrap();
            prop_assert!((direct - via_f).abs() / direct < 1e-10);
        }

        #[test]
        fn shorter_wavelength_means_higher_frequency_and_energy(
            lambda in spectrum_value(),
            ratio in 1.01f64..1e3,
        ) {
            let longer = lambda * ratio;
            prop_assert!(
                wavelength_to_frequency(lambda).unwrap() > wavelength_to_frequency(longer).unwrap()
            );
            prop_assert!(
                wavelength_to_energy_ev(lambda).unwrap() > wavelength_to_energy_ev(longer).unwrap()
            );
        }
    }
}
