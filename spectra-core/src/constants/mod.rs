//! Constants for Spectra Core
//!
//! This module provides centralized, well-documented constants used
//! throughout the spectrum engine. All numeric values are defined here with
//! clear explanations of their purpose, source, and rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Fundamental physical constants and catalog limits
//! - **Display**: Presentation defaults recognized by the surrounding UI
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include comprehensive documentation
//! 3. Reference the defining standard (CODATA, SI) where applicable
//! 4. Use descriptive names that include units

/// Fundamental physical constants and the catalog's outer wavelength limits.
pub mod physics;

/// Presentation defaults passed through to the UI layer.
pub mod display;

// Re-export commonly used constants for convenience
pub use physics::{
    SPEED_OF_LIGHT_M_PER_S,
    PLANCK_CONSTANT_J_S, PLANCK_CONSTANT_EV_S,
    EV_IN_JOULES,
    CATALOG_WAVELENGTH_MIN_M, CATALOG_WAVELENGTH_MAX_M,
};

pub use display::{
    DEFAULT_WAVELENGTH_SYMBOL, DEFAULT_FREQUENCY_SYMBOL, DEFAULT_ENERGY_SYMBOL,
    DEFAULT_DECIMAL_PLACES, DEFAULT_SCIENTIFIC_NOTATION,
};
