//! Frequency units, canonical unit hertz
//!
//! SI decade steps from hertz up to exahertz, which covers everything from
//! the bottom of the radio band to hard gamma. There are no sub-hertz units
//! in the table; the catalog never produces them and formatting renders
//! anything below 1 Hz in scientific notation.

use super::{QuantityKind, UnitScale};

/// Frequency units, largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyUnit {
    /// EHz, 1e18 Hz
    Exahertz,
    /// PHz, 1e15 Hz
    Petahertz,
    /// THz, 1e12 Hz
    Terahertz,
    /// GHz, 1e9 Hz
    Gigahertz,
    /// MHz, 1e6 Hz
    Megahertz,
    /// kHz, 1e3 Hz
    Kilohertz,
    /// Hz, the canonical unit
    Hertz,
}

impl UnitScale for FrequencyUnit {
    const KIND: QuantityKind = QuantityKind::Frequency;
    const CANONICAL: Self = Self::Hertz;
    const ALL: &'static [Self] = &[
        Self::Exahertz,
        Self::Petahertz,
        Self::Terahertz,
        Self::Gigahertz,
        Self::Megahertz,
        Self::Kilohertz,
        Self::Hertz,
    ];

    fn factor(self) -> f64 {
        match self {
            Self::Exahertz => 1e18,
            Self::Petahertz => 1e15,
            Self::Terahertz => 1e12,
            Self::Gigahertz => 1e9,
            Self::Megahertz => 1e6,
            Self::Kilohertz => 1e3,
            Self::Hertz => 1.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Exahertz => "EHz",
            Self::Petahertz => "PHz",
            Self::Terahertz => "THz",
            Self::Gigahertz => "GHz",
            Self::Megahertz => "MHz",
            Self::Kilohertz => "kHz",
            Self::Hertz => "Hz",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Exahertz => "exahertz",
            Self::Petahertz => "petahertz",
            Self::Terahertz => "terahertz",
            Self::Gigahertz => "gigahertz",
            Self::Megahertz => "megahertz",
            Self::Kilohertz => "kilohertz",
            Self::Hertz => "hertz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{best_unit, convert};

    #[test]
    fn symbol_round_trip() {
        for &unit in FrequencyUnit::ALL {
            assert_eq!(FrequencyUnit::from_symbol(unit.symbol()).unwrap(), unit);
        }
    }

    #[test]
    fn wifi_band_reads_in_gigahertz() {
        let (value, unit) = best_unit::<FrequencyUnit>(2.4e9);
        assert_eq!(unit, FrequencyUnit::Gigahertz);
        assert!((value - 2.4).abs() < 1e-12);
    }

    #[test]
    fn decade_conversion() {
        assert_eq!(
            convert(1.0, FrequencyUnit::Terahertz, FrequencyUnit::Gigahertz),
            1000.0
        );
    }
}
