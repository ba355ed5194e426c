//! Spectra WASM Bridge
//!
//! Connects the spectrum engine to the browser page. The page owns all
//! interaction state (the selected wavelength, input-field contents, pixel
//! geometry); this crate exposes the pure core functions across the FFI
//! boundary and collapses Rust's `Option` into the sentinel values
//! JavaScript callers expect.
//!
//! ## Sentinel Convention
//!
//! Inside the workspace, invalid magnitudes are `None` - a type the
//! compiler makes callers handle. JavaScript has no `Option`, so the
//! numeric exports collapse `None` to `NaN` *at this boundary and nowhere
//! else*; the page tests with `Number.isNaN` exactly as it would for any
//! other numeric API. Structured results cross as JSON strings.
//!
//! ## Usage
//!
//! ```js
//! import init, * as spectra from "./pkg/spectra_web.js";
//!
//! await init();
//! spectra.init();
//!
//! const snapshot = JSON.parse(spectra.snapshot_for_wavelength_json(550e-9));
//! document.title = snapshot.region.name; // "Visible Light"
//! ```

mod settings;
mod snapshot;

pub use settings::DisplaySettings;
pub use snapshot::{snapshot_for_wavelength, RegionSummary, SpectrumSnapshot};

use wasm_bindgen::prelude::*;

use spectra_core::{photon, scale};

/// Install the panic hook and console logger. Call once, right after the
/// wasm module loads.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("spectra-web {}: initialized", spectra_core::VERSION);
}

/// Full display state for a wavelength in meters, as a JSON string.
#[wasm_bindgen]
pub fn snapshot_for_wavelength_json(meters: f64) -> String {
    let snapshot = snapshot::snapshot_for_wavelength(meters);
    // Serialization of a plain data struct cannot fail; keep the FFI
    // surface infallible for the page
    serde_json::to_string(&snapshot).unwrap_or_else(|_| String::from("{}"))
}

/// Parse free text like `"550nm"` into meters; NaN when invalid.
#[wasm_bindgen]
pub fn parse_wavelength(text: &str) -> f64 {
    photon::parse_wavelength(text).unwrap_or(f64::NAN)
}

/// Parse free text like `"2.4 GHz"` into hertz; NaN when invalid.
#[wasm_bindgen]
pub fn parse_frequency(text: &str) -> f64 {
    photon::parse_frequency(text).unwrap_or(f64::NAN)
}

/// Parse free text like `"1.5eV"` into electron-volts; NaN when invalid.
#[wasm_bindgen]
pub fn parse_energy(text: &str) -> f64 {
    photon::parse_energy(text).unwrap_or(f64::NAN)
}

/// Position of a wavelength on the spectrum bar in `[0, 1]`; NaN when the
/// wavelength is invalid or outside the catalog.
#[wasm_bindgen]
pub fn band_position_for_wavelength(meters: f64) -> f64 {
    scale::band_position(meters).unwrap_or(f64::NAN)
}

/// Wavelength in meters at a spectrum-bar position in `[0, 1]`; NaN when
/// the position is off the bar.
#[wasm_bindgen]
pub fn wavelength_at_band_position(position: f64) -> f64 {
    scale::band_wavelength(position).unwrap_or(f64::NAN)
}

/// Factory display settings as a JSON string, for first-run pages with
/// nothing in local storage yet.
#[wasm_bindgen]
pub fn default_settings_json() -> String {
    serde_json::to_string(&DisplaySettings::default()).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_collapses_to_nan_only_at_the_boundary() {
        assert!(parse_wavelength("garbage").is_nan());
        assert!(band_position_for_wavelength(-1.0).is_nan());
        assert!(wavelength_at_band_position(2.0).is_nan());
    }

    #[test]
    fn json_surface_round_trips() {
        let json = snapshot_for_wavelength_json(550e-9);
        assert!(json.contains("Visible Light"));

        let defaults = default_settings_json();
        let parsed: DisplaySettings = serde_json::from_str(&defaults).unwrap();
        assert_eq!(parsed, DisplaySettings::default());
    }

    #[test]
    fn parsed_text_feeds_straight_into_a_snapshot() {
        let meters = parse_wavelength("550nm");
        let json = snapshot_for_wavelength_json(meters);
        assert!(json.contains("550.00 nm"));
    }
}
