//! Error Types for Unit Resolution Failures
//!
//! ## Design Philosophy
//!
//! Almost nothing in this crate raises an error. Physical quantities that are
//! zero, negative or non-finite are routine input (a user half-way through
//! typing into a text field) and are absorbed into `Option::None` by the
//! functions in [`photon`](crate::photon) and [`catalog`](crate::catalog).
//!
//! The one condition that *does* raise is an unknown unit symbol handed to
//! the symbol-based conversion API. That is a programming mistake - a typo
//! in a unit table or a call site - not bad user input, and it should
//! surface loudly during development rather than silently produce a wrong
//! number.
//!
//! Errors stay small and heap-free: the offending symbol is captured in a
//! fixed-capacity inline string so the type can travel through `no_std`
//! callers without allocating.

use heapless::String as InlineString;
use thiserror_no_std::Error;

use crate::units::QuantityKind;

/// Longest unit symbol we ever echo back in an error.
///
/// The longest symbol in any table is three bytes ("GHz", "keV"); sixteen
/// leaves room for whatever a caller mistyped.
pub const MAX_SYMBOL_LEN: usize = 16;

/// Result type for unit resolution operations
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors raised by the symbol-based unit API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// A unit symbol is not in the table for the requested quantity kind
    #[error("unknown {kind} unit symbol '{symbol}'")]
    UnknownUnit {
        /// The symbol that failed to resolve, truncated to [`MAX_SYMBOL_LEN`]
        symbol: InlineString<MAX_SYMBOL_LEN>,
        /// Which quantity kind's table was searched
        kind: QuantityKind,
    },
}

impl UnitError {
    /// Build an [`UnitError::UnknownUnit`] from a raw symbol.
    ///
    /// Symbols longer than [`MAX_SYMBOL_LEN`] are truncated at a character
    /// boundary; the error is diagnostic, not a round-trip of the input.
    pub fn unknown_unit(symbol: &str, kind: QuantityKind) -> Self {
        let mut inline = InlineString::new();
        for ch in symbol.chars() {
            if inline.push(ch).is_err() {
                break;
            }
        }
        UnitError::UnknownUnit { symbol: inline, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_keeps_symbol() {
        let err = UnitError::unknown_unit("furlongs", QuantityKind::Wavelength);
        let UnitError::UnknownUnit { symbol, kind } = err;
        assert_eq!(symbol.as_str(), "furlongs");
        assert_eq!(kind, QuantityKind::Wavelength);
    }

    #[test]
    fn oversized_symbol_is_truncated() {
        let err = UnitError::unknown_unit("x".repeat(40).as_str(), QuantityKind::Energy);
        let UnitError::UnknownUnit { symbol, .. } = err;
        assert_eq!(symbol.len(), MAX_SYMBOL_LEN);
    }
}
