// ============================================================================
// Standard Alphabets
// Built-in digit sets for the commonly used radices
// ============================================================================

use super::Alphabet;
use crate::numeric::{RadixError, RadixResult};

/// Built-in digit sets, keyed by radix. Immutable after initialization;
/// `to_base` and the convenience constructors resolve against this table.
const STANDARD_ALPHABETS: &[(usize, &str)] = &[
    (2, "01"),
    (8, "01234567"),
    (10, "0123456789"),
    (12, "0123456789XE"),
    (16, "0123456789ABCDEF"),
];

/// Look up the built-in digit string for a radix, if one is registered.
pub fn standard_digits(radix: usize) -> Option<&'static str> {
    STANDARD_ALPHABETS
        .iter()
        .find(|(r, _)| *r == radix)
        .map(|(_, digits)| *digits)
}

impl Alphabet {
    /// The built-in alphabet for a radix (2, 8, 10, 12 or 16).
    ///
    /// # Errors
    /// Returns `UnsupportedRadix` when no digit set is registered for
    /// the requested radix.
    pub fn standard(radix: usize) -> RadixResult<Self> {
        let digits = standard_digits(radix).ok_or(RadixError::UnsupportedRadix(radix))?;
        Ok(Self::new(digits).expect("built-in digit sets are valid"))
    }

    /// Binary digits `01`.
    pub fn binary() -> Self {
        Self::standard(2).expect("binary is registered")
    }

    /// Duodecimal digits `0123456789XE` (dozenal X/E notation).
    pub fn duodecimal() -> Self {
        Self::standard(12).expect("duodecimal is registered")
    }

    /// Hexadecimal digits `0123456789ABCDEF`.
    pub fn hexadecimal() -> Self {
        Self::standard(16).expect("hexadecimal is registered")
    }
}
