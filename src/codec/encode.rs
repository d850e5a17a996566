// ============================================================================
// Decimal-to-Radix Encoder
// Signed fractional f64 -> digit string under an alphabet
// ============================================================================

use crate::alphabet::Alphabet;
use smallvec::SmallVec;

/// Digit buffer sized so the common radices never spill to the heap.
type DigitBuf = SmallVec<[usize; 24]>;

/// Encode a decimal value as a digit string under an alphabet.
///
/// The integer part is produced by repeated division by the radix. The
/// fractional part is produced by repeated multiplication, stopping where
/// the value's own finite decimal expansion stops; a leftover remainder
/// above 0.5 rounds the last emitted digit up (no carry propagation, the
/// digit saturates at `radix - 1`). Trailing fractional zeros are stripped
/// and a fraction that strips to nothing loses its separator.
///
/// Non-finite values have no digit expansion and fall back to their plain
/// decimal rendering (`inf`, `-inf`, `NaN`).
///
/// # Example
/// ```
/// use radix_value::alphabet::Alphabet;
/// use radix_value::codec::encode;
///
/// let duo = Alphabet::new("0123456789XE").unwrap();
/// assert_eq!(encode(-3.5, &duo), "-3.6");
/// assert_eq!(encode(0.0, &duo), "0");
/// ```
pub fn encode(value: f64, alphabet: &Alphabet) -> String {
    let digits = alphabet.digits();

    if value == 0.0 {
        return digits[0].to_string();
    }
    if !value.is_finite() {
        // No digit expansion exists; fall back to the decimal rendering
        return value.to_string();
    }

    let radix = alphabet.radix() as f64;
    let magnitude = value.abs();
    let integer = magnitude.trunc();
    let fraction = magnitude - integer;

    // Integer digits, least significant first
    let mut int_digits = DigitBuf::new();
    let mut quotient = integer;
    while quotient != 0.0 {
        let remainder = quotient % radix;
        quotient = (quotient / radix).trunc();
        int_digits.push(remainder as usize);
    }

    let mut out = String::with_capacity(int_digits.len() + 16);
    if value < 0.0 {
        out.push('-');
    }
    if int_digits.is_empty() {
        // A zero integer part still needs its digit ("0.6", not ".6")
        out.push(digits[0]);
    } else {
        for &d in int_digits.iter().rev() {
            out.push(digits[d]);
        }
    }

    if fraction > 0.0 {
        let mut frac_digits = expand_fraction(fraction, alphabet.radix());
        while frac_digits.last() == Some(&0) {
            frac_digits.pop();
        }
        if !frac_digits.is_empty() {
            out.push('.');
            for &d in &frac_digits {
                out.push(digits[d]);
            }
        }
    }

    out
}

/// Expand a fraction in `[0, 1)` into base-`radix` digits.
///
/// The loop runs one step past the digit count of the fraction's own decimal
/// rendering, then applies the bounded round-half-up correction to the last
/// digit only.
fn expand_fraction(fraction: f64, radix: usize) -> DigitBuf {
    let mut digits = DigitBuf::new();
    let mut remainder = fraction;
    let base = radix as f64;

    for _ in 0..=decimal_fraction_digits(fraction) {
        let scaled = remainder * base;
        let digit = scaled.trunc();
        remainder = scaled - digit;
        digits.push(digit as usize);
    }

    if remainder > 0.5 {
        if let Some(last) = digits.last_mut() {
            // Carry never propagates past the last digit
            *last = (*last + 1).min(radix - 1);
        }
    }

    digits
}

/// Digit count of the fraction's shortest decimal rendering.
///
/// This bounds the expansion to the precision the source value actually
/// carries instead of chasing a non-terminating base-`radix` tail.
fn decimal_fraction_digits(fraction: f64) -> usize {
    let text = fraction.to_string();
    match text.split_once('.') {
        Some((_, decimals)) => decimals.len(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(digits: &str) -> Alphabet {
        Alphabet::new(digits).unwrap()
    }

    #[test]
    fn test_zero_is_the_zero_digit() {
        assert_eq!(encode(0.0, &alphabet("01")), "0");
        assert_eq!(encode(0.0, &alphabet("0123456789XE")), "0");
        assert_eq!(encode(0.0, &alphabet("ZY")), "Z");
        assert_eq!(encode(-0.0, &alphabet("01")), "0");
    }

    #[test]
    fn test_integers() {
        let bin = alphabet("01");
        assert_eq!(encode(10.0, &bin), "1010");
        assert_eq!(encode(1.0, &bin), "1");

        let duo = alphabet("0123456789XE");
        assert_eq!(encode(2.0, &duo), "2");
        assert_eq!(encode(10.0, &duo), "X");
        assert_eq!(encode(11.0, &duo), "E");
        assert_eq!(encode(12.0, &duo), "10");
        assert_eq!(encode(144.0, &duo), "100");

        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(encode(255.0, &hex), "FF");
        assert_eq!(encode(4096.0, &hex), "1000");
    }

    #[test]
    fn test_negative_integers() {
        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(encode(-255.0, &hex), "-FF");
        assert_eq!(encode(-1.0, &hex), "-1");
    }

    #[test]
    fn test_terminating_fractions() {
        let duo = alphabet("0123456789XE");
        assert_eq!(encode(-3.5, &duo), "-3.6");
        assert_eq!(encode(0.5, &duo), "0.6");
        assert_eq!(encode(0.25, &duo), "0.3");

        let bin = alphabet("01");
        assert_eq!(encode(2.5, &bin), "10.1");
        assert_eq!(encode(0.75, &bin), "0.11");

        let hex = alphabet("0123456789ABCDEF");
        assert_eq!(encode(0.5, &hex), "0.8");
        assert_eq!(encode(10.0625, &hex), "A.1");
    }

    #[test]
    fn test_zero_integer_part_keeps_a_digit() {
        assert_eq!(encode(0.5, &alphabet("01")), "0.1");
        assert_eq!(encode(-0.5, &alphabet("01")), "-0.1");
    }

    #[test]
    fn test_trailing_fraction_zeros_are_stripped() {
        let dec = alphabet("0123456789");
        assert_eq!(encode(1.5, &dec), "1.5");
        // 0.1 decimal is non-terminating in binary; the bounded expansion
        // yields only zero digits, which strip away entirely
        assert_eq!(encode(0.1, &alphabet("01")), "0");
    }

    #[test]
    fn test_bounded_round_half_up() {
        // 0.9 decimal in base 12 is 0.X97... after two digits the leftover
        // exceeds 0.5 and bumps the last emitted digit
        let duo = alphabet("0123456789XE");
        let encoded = encode(0.9, &duo);
        assert!(encoded.starts_with("0.X"), "got {}", encoded);
    }

    #[test]
    fn test_decimal_identity() {
        let dec = alphabet("0123456789");
        assert_eq!(encode(42.0, &dec), "42");
        assert_eq!(encode(-7.25, &dec), "-7.25");
    }

    #[test]
    fn test_non_finite_values_fall_back_to_decimal_rendering() {
        let bin = alphabet("01");
        assert_eq!(encode(f64::INFINITY, &bin), "inf");
        assert_eq!(encode(f64::NEG_INFINITY, &bin), "-inf");
        assert_eq!(encode(f64::NAN, &bin), "NaN");
    }

    #[test]
    fn test_decimal_fraction_digits() {
        assert_eq!(decimal_fraction_digits(0.5), 1);
        assert_eq!(decimal_fraction_digits(0.25), 2);
        assert_eq!(decimal_fraction_digits(0.0), 0);
    }
}
