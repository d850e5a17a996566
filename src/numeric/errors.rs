// ============================================================================
// Radix Errors
// Error types for alphabet validation and radix conversion
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

/// Errors that can occur while building alphabets or converting values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// Digit set cannot define a base (too short, duplicates, reserved chars)
    InvalidAlphabet(&'static str),
    /// Input text contains characters outside the alphabet
    InvalidDigit(BTreeSet<char>),
    /// Attempted division by zero (including zero to a negative power)
    DivisionByZero,
    /// No built-in alphabet is registered for the requested radix
    UnsupportedRadix(usize),
    /// Boundary input is neither a number, text, nor another value
    UnsupportedType(&'static str),
}

impl RadixError {
    /// Build an `InvalidDigit` error from any iterator of offending characters.
    pub fn invalid_digits<I: IntoIterator<Item = char>>(chars: I) -> Self {
        RadixError::InvalidDigit(chars.into_iter().collect())
    }
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::InvalidAlphabet(reason) => {
                write!(f, "invalid alphabet: {}", reason)
            },
            RadixError::InvalidDigit(chars) => {
                write!(f, "invalid digit(s) for alphabet: ")?;
                let mut first = true;
                for c in chars {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}'", c)?;
                    first = false;
                }
                Ok(())
            },
            RadixError::DivisionByZero => write!(f, "division by zero"),
            RadixError::UnsupportedRadix(radix) => {
                write!(f, "no built-in alphabet for radix {}", radix)
            },
            RadixError::UnsupportedType(kind) => {
                write!(f, "unsupported input type: {}", kind)
            },
        }
    }
}

impl std::error::Error for RadixError {}

/// Result type alias for radix operations
pub type RadixResult<T> = Result<T, RadixError>;
