//! Core conversion and classification engine for Spectra
//!
//! Turns a single point on the electromagnetic spectrum into everything a
//! presentation layer needs to show: the equivalent wavelength, frequency
//! and photon energy, human-readable renderings of all three, the spectral
//! region that owns the point, and its position on a logarithmic axis.
//!
//! Key constraints:
//! - Every operation is a pure, synchronous function over static data
//! - Invalid magnitudes degrade to `None`, never to a panic - the caller
//!   is typically mid-keystroke in a browser input field
//! - `no_std`-capable so the same crate serves wasm32 and native hosts
//!
//! ```
//! use spectra_core::{photon, catalog};
//!
//! let wavelength = 550e-9; // green light, in meters
//!
//! let frequency = photon::wavelength_to_frequency(wavelength).unwrap();
//! let energy = photon::wavelength_to_energy_ev(wavelength).unwrap();
//! let region = catalog::classify_by_wavelength(wavelength).unwrap();
//!
//! assert!(frequency > 5.4e14 && frequency < 5.5e14);
//! assert!(energy > 2.2 && energy < 2.3);
//! assert_eq!(region.name, "Visible Light");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod photon;
pub mod scale;
pub mod units;

// Public API
pub use catalog::{classify_by_energy_ev, classify_by_frequency, classify_by_wavelength, RegionId, SpectrumRegion};
pub use errors::{UnitError, UnitResult};
pub use units::{
    convert, best_unit,
    EnergyUnit, FrequencyUnit, QuantityKind, UnitScale, WavelengthUnit,
};

/// Crate version, straight from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
