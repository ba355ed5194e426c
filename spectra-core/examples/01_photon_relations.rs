//! Photon Relations Example
//!
//! This example demonstrates the simplest use case of Spectra: deriving
//! frequency and photon energy from a wavelength and rendering all three
//! the way the UI does.
//!
//! ## What You'll Learn
//!
//! - Converting between wavelength, frequency and photon energy
//! - How invalid input degrades to `None` instead of panicking
//! - Formatting values in their natural units
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_photon_relations
//! ```

use spectra_core::photon;

fn main() {
    println!("Spectra Photon Relations Example");
    println!("================================\n");

    let landmarks = [
        ("Green laser", 532e-9),
        ("Wi-Fi carrier", 0.125),
        ("Dental X-ray", 2e-11),
        ("FM broadcast", 3.0),
    ];

    for (label, wavelength) in &landmarks {
        let frequency = photon::wavelength_to_frequency(*wavelength).unwrap();
        let energy = photon::wavelength_to_energy_ev(*wavelength).unwrap();

        println!("{label}:");
        println!("  wavelength: {}", photon::format_wavelength(*wavelength));
        println!("  frequency:  {}", photon::format_frequency(frequency));
        println!("  energy:     {}", photon::format_energy(energy));
        println!();
    }

    // Invalid magnitudes never panic - they return None
    println!("Invalid input handling:");
    for bad in [0.0, -1.0, f64::NAN] {
        println!(
            "  wavelength_to_frequency({bad}) = {:?}",
            photon::wavelength_to_frequency(bad)
        );
    }

    // Free text from an input field, including sloppy suffixes
    println!("\nParsing user input:");
    for text in ["550nm", "0.3 mm", "5 um", "oops"] {
        println!("  {:10} -> {:?}", format!("{text:?}"), photon::parse_wavelength(text));
    }
}
