//! Spectrum Snapshot for the Browser UI
//!
//! One struct with everything the page renders after an interaction: the
//! three canonical quantities, their formatted renderings, the owning
//! region's metadata, and the position on the spectrum bar. The wavelength
//! is the single source of truth - frequency and energy are always derived
//! from it here, never stored independently, so the three displayed values
//! cannot drift apart between renders.

use serde::Serialize;

use spectra_core::{catalog, photon, scale, SpectrumRegion};

/// Region metadata as the UI consumes it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionSummary {
    /// Display name, e.g. "Visible Light"
    pub name: &'static str,
    /// Hex tint for the spectrum bar
    pub color_hint: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Representative applications
    pub applications: &'static [&'static str],
    /// Everyday examples
    pub examples: &'static [&'static str],
}

impl From<&'static SpectrumRegion> for RegionSummary {
    fn from(region: &'static SpectrumRegion) -> Self {
        Self {
            name: region.name,
            color_hint: region.color_hint,
            description: region.description,
            applications: region.applications,
            examples: region.examples,
        }
    }
}

/// Everything the page shows for one selected wavelength.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpectrumSnapshot {
    /// Canonical wavelength (m), or `None` if the input was invalid
    pub wavelength_m: Option<f64>,
    /// Derived frequency (Hz)
    pub frequency_hz: Option<f64>,
    /// Derived photon energy (eV)
    pub energy_ev: Option<f64>,
    /// Formatted wavelength, "Invalid wavelength" when invalid
    pub wavelength_text: String,
    /// Formatted frequency
    pub frequency_text: String,
    /// Formatted photon energy
    pub energy_text: String,
    /// Owning region, `None` when unknown or out of catalog
    pub region: Option<RegionSummary>,
    /// Position on the equal-band spectrum bar, `None` off-catalog
    pub bar_position: Option<f64>,
}

/// Build the full display state for a wavelength in meters.
///
/// Invalid input produces an all-invalid snapshot rather than an error:
/// the UI renders it as the neutral empty state.
pub fn snapshot_for_wavelength(meters: f64) -> SpectrumSnapshot {
    let frequency = photon::wavelength_to_frequency(meters);
    let energy = photon::wavelength_to_energy_ev(meters);

    SpectrumSnapshot {
        wavelength_m: (meters.is_finite() && meters > 0.0).then_some(meters),
        frequency_hz: frequency,
        energy_ev: energy,
        wavelength_text: photon::format_wavelength(meters),
        frequency_text: photon::format_frequency(frequency.unwrap_or(f64::NAN)),
        energy_text: photon::format_energy(energy.unwrap_or(f64::NAN)),
        region: catalog::classify_by_wavelength(meters).map(RegionSummary::from),
        bar_position: scale::band_position(meters),
    }
}
