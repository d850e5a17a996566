// ============================================================================
// Radix-to-Decimal Decoder
// Signed digit string under an alphabet -> f64, with digit validation
// ============================================================================

use crate::alphabet::Alphabet;
use crate::numeric::{RadixError, RadixResult};
use std::collections::BTreeSet;

/// Decode a digit string under an alphabet back into a decimal value.
///
/// A leading `-` sets the sign and a single `.` separates the integer and
/// fractional digit runs. Every other character must belong to the
/// alphabet.
///
/// # Errors
/// Returns `InvalidDigit` with the full offending character set when the
/// text contains characters outside the alphabet, or names `.` when more
/// than one separator is present.
///
/// # Example
/// ```
/// use radix_value::alphabet::Alphabet;
/// use radix_value::codec::decode;
///
/// let bin = Alphabet::new("01").unwrap();
/// assert_eq!(decode("1010", &bin).unwrap(), 10.0);
/// assert_eq!(decode("-10.1", &bin).unwrap(), -2.5);
/// ```
pub fn decode(text: &str, alphabet: &Alphabet) -> RadixResult<f64> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text),
    };

    let invalid: BTreeSet<char> = body
        .chars()
        .filter(|&c| c != '.' && !alphabet.contains(c))
        .collect();
    if !invalid.is_empty() {
        return Err(RadixError::InvalidDigit(invalid));
    }
    if body.matches('.').count() > 1 {
        return Err(RadixError::invalid_digits(['.']));
    }

    let (integer_text, fraction_text) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (body, ""),
    };

    let radix = alphabet.radix() as f64;
    let mut value = 0.0;

    let int_len = integer_text.chars().count();
    for (offset, c) in integer_text.chars().enumerate() {
        let digit = digit_value(c, alphabet);
        value += digit * radix.powi((int_len - 1 - offset) as i32);
    }

    for (offset, c) in fraction_text.chars().enumerate() {
        let digit = digit_value(c, alphabet);
        value += digit * radix.powi(-(offset as i32 + 1));
    }

    Ok(sign * value)
}

#[inline]
fn digit_value(c: char, alphabet: &Alphabet) -> f64 {
    alphabet
        .value(c)
        .expect("characters are validated against the alphabet before use") as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(digits: &str) -> Alphabet {
        Alphabet::new(digits).unwrap()
    }

    #[test]
    fn test_integers() {
        let bin = alphabet("01");
        assert_eq!(decode("1010", &bin).unwrap(), 10.0);
        assert_eq!(decode("0", &bin).unwrap(), 0.0);

        let duo = alphabet("0123456789XE");
        assert_eq!(decode("X", &duo).unwrap(), 10.0);
        assert_eq!(decode("E", &duo).unwrap(), 11.0);
        assert_eq!(decode("10", &duo).unwrap(), 12.0);
        assert_eq!(decode("100", &duo).unwrap(), 144.0);

        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(decode("FF", &hex).unwrap(), 255.0);
    }

    #[test]
    fn test_sign() {
        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(decode("-FF", &hex).unwrap(), -255.0);
        assert_eq!(decode("-0", &hex).unwrap(), 0.0);
    }

    #[test]
    fn test_fractions() {
        let duo = alphabet("0123456789XE");
        assert_eq!(decode("0.6", &duo).unwrap(), 0.5);
        assert_eq!(decode("-3.6", &duo).unwrap(), -3.5);

        let bin = alphabet("01");
        assert_eq!(decode("10.1", &bin).unwrap(), 2.5);
        assert_eq!(decode("0.11", &bin).unwrap(), 0.75);
    }

    #[test]
    fn test_empty_parts() {
        let dec = alphabet("0123456789");
        // A bare fraction decodes with an implicit zero integer part
        assert_eq!(decode(".5", &dec).unwrap(), 0.5);
        // A bare integer with a dangling separator has no fractional term
        assert_eq!(decode("5.", &dec).unwrap(), 5.0);
        // The empty string carries no digits at all
        assert_eq!(decode("", &dec).unwrap(), 0.0);
    }

    #[test]
    fn test_non_canonical_leading_zeros() {
        let dec = alphabet("0123456789");
        assert_eq!(decode("007", &dec).unwrap(), 7.0);
    }

    #[test]
    fn test_invalid_digit_reports_offending_set() {
        let dec = alphabet("0123456789");
        let err = decode("1A", &dec).unwrap_err();
        assert_eq!(err, RadixError::invalid_digits(['A']));

        let err = decode("xy1z", &dec).unwrap_err();
        assert_eq!(err, RadixError::invalid_digits(['x', 'y', 'z']));
    }

    #[test]
    fn test_sign_only_leading() {
        let bin = alphabet("01");
        // An interior '-' is not a sign and fails validation
        assert_eq!(
            decode("1-0", &bin).unwrap_err(),
            RadixError::invalid_digits(['-'])
        );
    }

    #[test]
    fn test_double_separator() {
        let bin = alphabet("01");
        assert_eq!(
            decode("1.0.1", &bin).unwrap_err(),
            RadixError::invalid_digits(['.'])
        );
    }

    #[test]
    fn test_case_sensitivity() {
        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(
            decode("ff", &hex).unwrap_err(),
            RadixError::invalid_digits(['f'])
        );
    }
}
