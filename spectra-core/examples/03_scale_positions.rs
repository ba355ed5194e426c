//! Scale Positions Example
//!
//! Shows the two logarithmic mappings: a plain [min, max] axis, and the
//! equal-band spectrum bar a browser UI renders.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_scale_positions
//! ```

use spectra_core::{catalog, photon, scale};

fn main() {
    println!("Spectra Scale Positions Example");
    println!("===============================\n");

    // Plain log axis: visible band, 380-700 nm
    let (min, max) = (380e-9, 700e-9);
    println!("Visible-band axis positions:");
    for nm in [380.0, 450.0, 550.0, 650.0, 700.0] {
        let lambda = nm * 1e-9;
        println!("  {nm:5.0} nm -> {:.3}", scale::to_position(lambda, min, max));
    }

    // The spectrum bar: seven equal bands, log-interpolated within each
    println!("\nSpectrum bar, sampled every 10%:");
    for step in 0..=10 {
        let position = step as f64 / 10.0;
        let wavelength = scale::band_wavelength(position).unwrap();
        let region = catalog::classify_by_wavelength(wavelength).unwrap();
        println!(
            "  {position:.1} -> {:12} ({})",
            photon::format_wavelength(wavelength),
            region.name,
        );
    }

    // Round trip: a click position survives the value-and-back journey
    let click = 0.42;
    let wavelength = scale::band_wavelength(click).unwrap();
    let back = scale::band_position(wavelength).unwrap();
    println!("\nclick {click} -> {} -> position {back:.4}", photon::format_wavelength(wavelength));
}
