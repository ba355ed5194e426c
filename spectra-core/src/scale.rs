//! Logarithmic Axis Positioning
//!
//! ## Overview
//!
//! The spectrum spans roughly 21 orders of magnitude, so a visual axis has
//! to be logarithmic: equal steps represent equal *ratios*, not equal
//! differences. This module is the one shared implementation of the
//! value-to-position mapping - the presentation layer and its tests both
//! call in here instead of re-deriving the arithmetic, which is exactly
//! the kind of sign-and-direction math that goes subtly wrong when copied
//! across call sites.
//!
//! ## Two Mappings
//!
//! - [`to_position`] / [`from_position`]: a value against an arbitrary
//!   `[min, max]` decade range, normalized to `[0, 1]`. Unclamped - values
//!   outside the range map outside `[0, 1]` and callers that want clamping
//!   do it themselves.
//! - [`band_position`] / [`band_wavelength`]: a wavelength against the
//!   whole region catalog, where every region gets an equal-width band and
//!   position *within* a band is log-interpolated. This is the geometry of
//!   the clickable spectrum bar: gamma takes the same screen width as the
//!   visible band even though it spans four decades to visible's third of
//!   one.
//!
//! ## Leniency
//!
//! Degenerate input to the `[min, max]` mappings (non-positive or reversed
//! bounds, non-finite values) returns 0.0 rather than erroring. That is a
//! deliberate UI robustness choice, not mathematical correctness - the
//! tests flag it explicitly so nobody mistakes it for a derived property.

use crate::catalog::REGIONS;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "std")]
fn log10(x: f64) -> f64 {
    x.log10()
}

#[cfg(not(feature = "std"))]
fn log10(x: f64) -> f64 {
    libm::log10(x)
}

#[cfg(feature = "std")]
fn pow10(x: f64) -> f64 {
    10f64.powf(x)
}

#[cfg(not(feature = "std"))]
fn pow10(x: f64) -> f64 {
    libm::pow(10.0, x)
}

/// A usable log axis: positive, finite, non-degenerate bounds.
fn valid_axis(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0 && min < max
}

/// Normalized position of `value` on the log axis `[min, max]`.
///
/// 0.0 at `min`, 1.0 at `max`, unclamped outside. Degenerate input (any
/// non-positive or non-finite argument, or `min >= max`) returns 0.0.
pub fn to_position(value: f64, min: f64, max: f64) -> f64 {
    if !valid_axis(min, max) || !value.is_finite() || value <= 0.0 {
        log_warn!("degenerate log-axis input ({value}, {min}, {max}), coercing to 0");
        return 0.0;
    }
    (log10(value) - log10(min)) / (log10(max) - log10(min))
}

/// Value at normalized `position` on the log axis `[min, max]`.
///
/// Exact inverse of [`to_position`] for valid input; positions outside
/// `[0, 1]` extrapolate. Degenerate bounds or a non-finite position return
/// 0.0.
pub fn from_position(position: f64, min: f64, max: f64) -> f64 {
    if !valid_axis(min, max) || !position.is_finite() {
        log_warn!("degenerate log-axis input ({position}, {min}, {max}), coercing to 0");
        return 0.0;
    }
    pow10(log10(min) + position * (log10(max) - log10(min)))
}

/// Position of a wavelength on the equal-band spectrum bar, in `[0, 1]`.
///
/// Each catalog region occupies `1/7` of the bar; within its band the
/// wavelength is log-interpolated. Wavelengths outside the catalog return
/// `None`, matching the classifier.
pub fn band_position(wavelength_m: f64) -> Option<f64> {
    if !wavelength_m.is_finite() || wavelength_m <= 0.0 {
        return None;
    }
    let index = REGIONS
        .iter()
        .position(|region| region.contains_wavelength(wavelength_m))?;
    let region = &REGIONS[index];
    let within = to_position(wavelength_m, region.wavelength_min_m, region.wavelength_max_m);
    Some((index as f64 + within) / REGIONS.len() as f64)
}

/// Wavelength at a position on the equal-band spectrum bar.
///
/// Inverse of [`band_position`]. Positions outside `[0, 1]` return `None` -
/// a click can't land off the bar, so out-of-range here means a caller bug
/// upstream of the pixel math.
pub fn band_wavelength(position: f64) -> Option<f64> {
    if !position.is_finite() || !(0.0..=1.0).contains(&position) {
        return None;
    }
    let scaled = position * REGIONS.len() as f64;
    let index = (scaled as usize).min(REGIONS.len() - 1);
    let within = scaled - index as f64;
    let region = &REGIONS[index];
    let value = from_position(within, region.wavelength_min_m, region.wavelength_max_m);
    // pow10(log10(x)) can land an ulp outside the band; keep clicks in-catalog
    Some(value.clamp(region.wavelength_min_m, region.wavelength_max_m))
}
