//! Wavelength units, canonical unit meters
//!
//! The table spans the whole catalog: kilometers for long radio down to
//! femtometers at the bottom of the gamma band. The factors double as the
//! best-unit thresholds, so the descending table is also the bracket list
//! used by formatting.

use super::{QuantityKind, UnitScale};

/// Wavelength units, largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WavelengthUnit {
    /// km, 1e3 m
    Kilometers,
    /// m, the canonical unit
    Meters,
    /// cm, 1e-2 m
    Centimeters,
    /// mm, 1e-3 m
    Millimeters,
    /// µm, 1e-6 m
    Micrometers,
    /// nm, 1e-9 m
    Nanometers,
    /// pm, 1e-12 m
    Picometers,
    /// fm, 1e-15 m
    Femtometers,
}

impl UnitScale for WavelengthUnit {
    const KIND: QuantityKind = QuantityKind::Wavelength;
    const CANONICAL: Self = Self::Meters;
    const ALL: &'static [Self] = &[
        Self::Kilometers,
        Self::Meters,
        Self::Centimeters,
        Self::Millimeters,
        Self::Micrometers,
        Self::Nanometers,
        Self::Picometers,
        Self::Femtometers,
    ];

    fn factor(self) -> f64 {
        match self {
            Self::Kilometers => 1e3,
            Self::Meters => 1.0,
            Self::Centimeters => 1e-2,
            Self::Millimeters => 1e-3,
            Self::Micrometers => 1e-6,
            Self::Nanometers => 1e-9,
            Self::Picometers => 1e-12,
            Self::Femtometers => 1e-15,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Micrometers => "µm",
            Self::Nanometers => "nm",
            Self::Picometers => "pm",
            Self::Femtometers => "fm",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Kilometers => "kilometers",
            Self::Meters => "meters",
            Self::Centimeters => "centimeters",
            Self::Millimeters => "millimeters",
            Self::Micrometers => "micrometers",
            Self::Nanometers => "nanometers",
            Self::Picometers => "picometers",
            Self::Femtometers => "femtometers",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            // ASCII spelling for keyboards without a micro sign
            Self::Micrometers => &["um"],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for &unit in WavelengthUnit::ALL {
            assert_eq!(WavelengthUnit::from_symbol(unit.symbol()).unwrap(), unit);
        }
    }

    #[test]
    fn symbols_resolve_case_insensitively() {
        assert_eq!(WavelengthUnit::from_symbol("NM").unwrap(), WavelengthUnit::Nanometers);
        assert_eq!(WavelengthUnit::from_symbol("Km").unwrap(), WavelengthUnit::Kilometers);
        assert_eq!(WavelengthUnit::from_symbol("um").unwrap(), WavelengthUnit::Micrometers);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert!(WavelengthUnit::from_symbol("lightyears").is_err());
        assert!(WavelengthUnit::from_symbol("").is_err());
    }
}
