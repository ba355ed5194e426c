//! Display Settings Pass-Through
//!
//! The page persists a handful of user preferences in local storage and
//! hands them back on load. The core never consumes them - they shape
//! presentation only - but the defaults live in `spectra-core`'s constants
//! so the two sides cannot disagree about what "factory settings" means.

use serde::{Deserialize, Serialize};

use spectra_core::constants::display::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_ENERGY_SYMBOL, DEFAULT_FREQUENCY_SYMBOL,
    DEFAULT_SCIENTIFIC_NOTATION, DEFAULT_WAVELENGTH_SYMBOL,
};

/// User display preferences, persisted by the page as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Preferred wavelength unit symbol
    pub wavelength_unit: String,
    /// Preferred frequency unit symbol
    pub frequency_unit: String,
    /// Preferred energy unit symbol
    pub energy_unit: String,
    /// Whether out-of-bracket values use scientific notation
    pub scientific_notation: bool,
    /// Decimal digits in formatted values
    pub decimal_places: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            wavelength_unit: DEFAULT_WAVELENGTH_SYMBOL.to_owned(),
            frequency_unit: DEFAULT_FREQUENCY_SYMBOL.to_owned(),
            energy_unit: DEFAULT_ENERGY_SYMBOL.to_owned(),
            scientific_notation: DEFAULT_SCIENTIFIC_NOTATION,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_constants() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.wavelength_unit, "nm");
        assert_eq!(settings.frequency_unit, "THz");
        assert_eq!(settings.energy_unit, "eV");
        assert!(settings.scientific_notation);
        assert_eq!(settings.decimal_places, 2);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: DisplaySettings = serde_json::from_str(r#"{"decimal_places": 4}"#).unwrap();
        assert_eq!(settings.decimal_places, 4);
        assert_eq!(settings.wavelength_unit, "nm");
    }
}
