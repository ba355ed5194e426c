//! Spectral Region Catalog
//!
//! ## Overview
//!
//! A static, ordered table of the seven named bands of the electromagnetic
//! spectrum, from gamma rays at one femtometer to radio waves at ten
//! kilometers, with the descriptive metadata an educational UI shows next
//! to a selected value.
//!
//! ## Table Design
//!
//! Regions are stored in ascending-wavelength order with exactly contiguous
//! bounds: each region's upper wavelength bound *is* the next region's
//! lower bound. Only the wavelength axis is stored. The frequency and
//! energy bounds the UI displays are derived through the photon relations
//! ([`SpectrumRegion::frequency_bounds`], [`SpectrumRegion::energy_bounds_ev`]),
//! so the three axes cannot drift apart the way independently maintained
//! columns can. A data-integrity test still asserts the cross-axis
//! consistency tolerance, which catches a bad hand-edit of the table.
//!
//! ## Classification
//!
//! Classification is a linear scan over seven entries returning the first
//! region whose closed interval contains the value. Shared boundaries (the
//! 380 nm and 700 nm edges of visible light, and every other seam) belong
//! to both neighbors' closed intervals; first-match order makes the
//! shorter-wavelength region the deterministic owner. Values outside the
//! catalog - shorter than 1 fm, longer than 10 km, or not a positive finite
//! number at all - return `None`. The catalog does not claim to cover the
//! physically possible range, and callers render "unknown region" as a
//! normal state.

use crate::constants::physics::{
    CATALOG_WAVELENGTH_MAX_M, CATALOG_WAVELENGTH_MIN_M, PLANCK_CONSTANT_EV_S,
    SPEED_OF_LIGHT_M_PER_S,
};
use crate::photon;

/// Identifier for one named band of the electromagnetic spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionId {
    /// Gamma rays, the shortest-wavelength band
    Gamma,
    /// X-rays
    XRay,
    /// Ultraviolet
    Ultraviolet,
    /// The narrow band human eyes respond to
    Visible,
    /// Infrared
    Infrared,
    /// Microwaves
    Microwave,
    /// Radio waves, the longest-wavelength band
    Radio,
}

/// One named band of the electromagnetic spectrum.
///
/// Wavelength bounds are authoritative; frequency and energy bounds are
/// derived on demand so the axes stay mutually consistent by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpectrumRegion {
    /// Stable identifier
    pub id: RegionId,
    /// Display name, e.g. "Visible Light"
    pub name: &'static str,
    /// Hex color the UI tints this band with on the spectrum bar
    pub color_hint: &'static str,
    /// Shortest wavelength in the band (m), inclusive
    pub wavelength_min_m: f64,
    /// Longest wavelength in the band (m), inclusive
    pub wavelength_max_m: f64,
    /// One-paragraph description shown when the band is selected
    pub description: &'static str,
    /// Representative technology applications
    pub applications: &'static [&'static str],
    /// Everyday or astrophysical examples
    pub examples: &'static [&'static str],
}

impl SpectrumRegion {
    /// Whether the closed wavelength interval contains `meters`.
    pub fn contains_wavelength(&self, meters: f64) -> bool {
        self.wavelength_min_m <= meters && meters <= self.wavelength_max_m
    }

    /// Frequency bounds (Hz) as `(min, max)`, derived from the wavelength
    /// bounds via f = c / λ. The longest wavelength gives the lowest
    /// frequency.
    pub fn frequency_bounds(&self) -> (f64, f64) {
        (
            SPEED_OF_LIGHT_M_PER_S / self.wavelength_max_m,
            SPEED_OF_LIGHT_M_PER_S / self.wavelength_min_m,
        )
    }

    /// Photon-energy bounds (eV) as `(min, max)`, derived from the
    /// wavelength bounds via E = h_eV · c / λ.
    pub fn energy_bounds_ev(&self) -> (f64, f64) {
        let hc = PLANCK_CONSTANT_EV_S * SPEED_OF_LIGHT_M_PER_S;
        (hc / self.wavelength_max_m, hc / self.wavelength_min_m)
    }
}

/// The spectral-region catalog, ascending wavelength.
///
/// Bounds (meters): 1e-15 | 1e-11 | 1e-8 | 3.8e-7 | 7.0e-7 | 1e-3 | 1.0 | 1e4
pub static REGIONS: [SpectrumRegion; 7] = [
    // 1 fm - 10 pm
    SpectrumRegion {
        id: RegionId::Gamma,
        name: "Gamma Rays",
        color_hint: "#9c27b0",
        wavelength_min_m: CATALOG_WAVELENGTH_MIN_M,
        wavelength_max_m: 1e-11,
        description: "The most energetic radiation in the spectrum, emitted by \
            nuclear transitions, particle annihilation and the most violent \
            astrophysical events. Gamma photons carry enough energy to ionize \
            almost anything they meet.",
        applications: &[
            "Cancer radiotherapy",
            "Sterilization of medical equipment",
            "Industrial flaw detection",
            "Gamma-ray astronomy",
        ],
        examples: &[
            "Radioactive decay of cobalt-60",
            "Gamma-ray bursts from collapsing stars",
            "PET scan annihilation photons",
        ],
    },
    // 10 pm - 10 nm
    SpectrumRegion {
        id: RegionId::XRay,
        name: "X-Rays",
        color_hint: "#673ab7",
        wavelength_min_m: 1e-11,
        wavelength_max_m: 1e-8,
        description: "Penetrating radiation produced when fast electrons are \
            stopped or rearranged in inner atomic shells. X-ray photons pass \
            through soft tissue but are absorbed by denser material, which is \
            what makes them an imaging workhorse.",
        applications: &[
            "Medical radiography and CT",
            "Airport security scanning",
            "X-ray crystallography",
            "Materials inspection",
        ],
        examples: &[
            "A dental radiograph",
            "Accretion disks around black holes",
            "Solar flare emission",
        ],
    },
    // 10 nm - 380 nm
    SpectrumRegion {
        id: RegionId::Ultraviolet,
        name: "Ultraviolet",
        color_hint: "#3f51b5",
        wavelength_min_m: 1e-8,
        wavelength_max_m: 3.8e-7,
        description: "Just beyond the violet end of human vision. Energetic \
            enough to drive photochemistry: it tans skin, degrades plastics \
            and kills microbes, and the shortest bands are absorbed by \
            atmospheric ozone before reaching the ground.",
        applications: &[
            "Germicidal sterilization",
            "Photolithography",
            "Fluorescence microscopy",
            "UV curing of inks and resins",
        ],
        examples: &[
            "Sunburn from summer sunlight",
            "A black light making posters glow",
            "Fluorescent minerals under a UV lamp",
        ],
    },
    // 380 nm - 700 nm
    SpectrumRegion {
        id: RegionId::Visible,
        name: "Visible Light",
        color_hint: "#4caf50",
        wavelength_min_m: 3.8e-7,
        wavelength_max_m: 7.0e-7,
        description: "The narrow slice of the spectrum human eyes detect, \
            from violet near 380 nm to deep red near 700 nm. A thin band - \
            less than one octave - yet it carries almost everything we call \
            seeing.",
        applications: &[
            "Human vision",
            "Photography and displays",
            "Optical microscopy",
            "Laser pointers and barcode scanners",
        ],
        examples: &[
            "A rainbow after a storm",
            "Green laser light at 532 nm",
            "Sodium street lamps at 589 nm",
        ],
    },
    // 700 nm - 1 mm
    SpectrumRegion {
        id: RegionId::Infrared,
        name: "Infrared",
        color_hint: "#e53935",
        wavelength_min_m: 7.0e-7,
        wavelength_max_m: 1e-3,
        description: "Radiated by anything warm: every object near room \
            temperature glows brightly here. Spans three decades from the \
            edge of visible red out to the millimeter boundary with \
            microwaves.",
        applications: &[
            "Thermal imaging",
            "Night-vision equipment",
            "Fiber-optic communication",
            "Television remote controls",
        ],
        examples: &[
            "Body heat seen by a thermal camera",
            "A heat lamp keeping food warm",
            "The 1550 nm band inside an optical fiber",
        ],
    },
    // 1 mm - 1 m
    SpectrumRegion {
        id: RegionId::Microwave,
        name: "Microwaves",
        color_hint: "#fb8c00",
        wavelength_min_m: 1e-3,
        wavelength_max_m: 1.0,
        description: "Short-wavelength radio. Microwaves pierce weather and \
            the ionosphere cleanly, which makes them the band of choice for \
            radar, satellite links and the resonant heating of water \
            molecules.",
        applications: &[
            "Microwave ovens",
            "Radar",
            "Wi-Fi and Bluetooth",
            "Satellite communication",
        ],
        examples: &[
            "A 2.45 GHz oven reheating dinner",
            "The cosmic microwave background",
            "Weather radar sweeps",
        ],
    },
    // 1 m - 10 km
    SpectrumRegion {
        id: RegionId::Radio,
        name: "Radio Waves",
        color_hint: "#6d4c41",
        wavelength_min_m: 1.0,
        wavelength_max_m: CATALOG_WAVELENGTH_MAX_M,
        description: "The longest wavelengths in the catalog, diffracting \
            around hills and following the curve of the Earth. Low photon \
            energies - the quantum picture almost disappears and classical \
            antennas take over.",
        applications: &[
            "AM and FM broadcasting",
            "Two-way and amateur radio",
            "Radio navigation",
            "Radio astronomy",
        ],
        examples: &[
            "An FM station at 100 MHz",
            "Shortwave broadcasts bouncing off the ionosphere",
            "Longwave time signals",
        ],
    },
];

/// Classify a wavelength (m) into its owning spectral region.
///
/// First match in ascending-wavelength order wins, so shared boundary
/// values deterministically belong to the shorter-wavelength region.
/// Non-finite, non-positive and out-of-catalog values return `None`.
pub fn classify_by_wavelength(meters: f64) -> Option<&'static SpectrumRegion> {
    if !(meters.is_finite() && meters > 0.0) {
        return None;
    }
    REGIONS.iter().find(|region| region.contains_wavelength(meters))
}

/// Classify a frequency (Hz) into its owning spectral region.
///
/// Converts to wavelength first, so this always agrees with
/// [`classify_by_wavelength`] on the same physical point.
pub fn classify_by_frequency(hertz: f64) -> Option<&'static SpectrumRegion> {
    photon::frequency_to_wavelength(hertz).and_then(classify_by_wavelength)
}

/// Classify a photon energy (eV) into its owning spectral region.
///
/// Converts to wavelength first, so this always agrees with
/// [`classify_by_wavelength`] on the same physical point.
pub fn classify_by_energy_ev(ev: f64) -> Option<&'static SpectrumRegion> {
    photon::energy_ev_to_wavelength(ev).and_then(classify_by_wavelength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_landmarks() {
        assert_eq!(classify_by_wavelength(550e-9).unwrap().id, RegionId::Visible);
        assert_eq!(classify_by_wavelength(1e-15).unwrap().id, RegionId::Gamma);
        assert_eq!(classify_by_wavelength(1e2).unwrap().id, RegionId::Radio);
    }

    #[test]
    fn invalid_and_out_of_catalog_values() {
        assert!(classify_by_wavelength(-1.0).is_none());
        assert!(classify_by_wavelength(0.0).is_none());
        assert!(classify_by_wavelength(f64::NAN).is_none());
        assert!(classify_by_wavelength(f64::INFINITY).is_none());
        // Deliberately bounded: past either end is "no known region"
        assert!(classify_by_wavelength(1e-16).is_none());
        assert!(classify_by_wavelength(1e5).is_none());
    }

    #[test]
    fn shared_boundaries_resolve_to_shorter_wavelength_region() {
        // 380 nm sits in both closed intervals; ultraviolet owns it
        assert_eq!(classify_by_wavelength(3.8e-7).unwrap().id, RegionId::Ultraviolet);
        // 700 nm likewise belongs to visible, not infrared
        assert_eq!(classify_by_wavelength(7.0e-7).unwrap().id, RegionId::Visible);
    }

    #[test]
    fn regions_are_contiguous_and_ordered() {
        for pair in REGIONS.windows(2) {
            assert!(pair[0].wavelength_min_m < pair[0].wavelength_max_m);
            assert_eq!(pair[0].wavelength_max_m, pair[1].wavelength_min_m);
        }
        let last = &REGIONS[REGIONS.len() - 1];
        assert!(last.wavelength_min_m < last.wavelength_max_m);
    }

    #[test]
    fn derived_bounds_are_ordered_and_positive() {
        for region in &REGIONS {
            let (f_min, f_max) = region.frequency_bounds();
            let (e_min, e_max) = region.energy_bounds_ev();
            assert!(f_min > 0.0 && f_min < f_max);
            assert!(e_min > 0.0 && e_min < e_max);
        }
    }

    #[test]
    fn classifiers_agree_at_region_midpoints() {
        for region in &REGIONS {
            // Geometric midpoint stays inside the band on a log axis
            let lambda = (region.wavelength_min_m * region.wavelength_max_m).sqrt();
            let by_wavelength = classify_by_wavelength(lambda).unwrap();
            let f = photon::wavelength_to_frequency(lambda).unwrap();
            let e = photon::wavelength_to_energy_ev(lambda).unwrap();
            assert_eq!(classify_by_frequency(f).unwrap().id, by_wavelength.id);
            assert_eq!(classify_by_energy_ev(e).unwrap().id, by_wavelength.id);
        }
    }
}
