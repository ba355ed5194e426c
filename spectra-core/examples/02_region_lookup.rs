//! Region Lookup Example
//!
//! Walks the spectral-region catalog and classifies a few landmark values
//! on all three axes.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_region_lookup
//! ```

use spectra_core::{catalog, photon};

fn main() {
    println!("Spectra Region Lookup Example");
    println!("=============================\n");

    println!("Catalog ({} regions, ascending wavelength):", catalog::REGIONS.len());
    for region in &catalog::REGIONS {
        let (f_min, f_max) = region.frequency_bounds();
        println!(
            "  {:13} {} - {}  ({} - {})",
            region.name,
            photon::format_wavelength(region.wavelength_min_m),
            photon::format_wavelength(region.wavelength_max_m),
            photon::format_frequency(f_min),
            photon::format_frequency(f_max),
        );
    }

    println!("\nClassifying landmarks:");
    let landmarks = [("green light", 550e-9), ("microwave oven", 0.122), ("cosmic gamma", 1e-14)];
    for (label, wavelength) in &landmarks {
        let region = catalog::classify_by_wavelength(*wavelength).unwrap();
        println!("  {label}: {}", region.name);
        println!("    {}", region.description);
        println!("    e.g. {}", region.examples[0]);
    }

    // The same physical point classifies identically on every axis
    let f = photon::wavelength_to_frequency(550e-9).unwrap();
    let e = photon::wavelength_to_energy_ev(550e-9).unwrap();
    assert_eq!(
        catalog::classify_by_frequency(f).unwrap().id,
        catalog::classify_by_energy_ev(e).unwrap().id,
    );
    println!("\nClassifier agreement holds for 550 nm on all three axes.");

    // Out-of-catalog values are a normal state, not an error
    println!(
        "classify(1 light-year) = {:?}",
        catalog::classify_by_wavelength(9.46e15).map(|r| r.name)
    );
}
