// ============================================================================
// Codec Module
// The conversion engine: decimal <-> radix string
// ============================================================================
//
// This module provides:
// - encode: signed fractional f64 -> digit string under an alphabet
// - decode: digit string -> f64, validating every character
//
// Design principles:
// - Pure functions, no shared state, deterministic failures
// - Fractional expansion is bounded by the source value's own decimal
//   precision; rounding corrects the last digit only (never carries)
// - Values are f64 throughout: representation error is handled by the
//   bounded rounding rule, not by exact arbitrary-precision expansion

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use proptest::prelude::*;

    const STANDARD_DIGIT_SETS: [&str; 5] = [
        "01",
        "01234567",
        "0123456789",
        "0123456789XE",
        "0123456789ABCDEF",
    ];

    proptest! {
        #[test]
        fn round_trip_non_negative_integers(n in 0u32..10_000_000u32) {
            for digits in STANDARD_DIGIT_SETS {
                let alphabet = Alphabet::new(digits).unwrap();
                let encoded = encode(n as f64, &alphabet);
                prop_assert_eq!(decode(&encoded, &alphabet).unwrap(), n as f64);
            }
        }

        #[test]
        fn sign_symmetry(n in 1u32..10_000_000u32) {
            for digits in STANDARD_DIGIT_SETS {
                let alphabet = Alphabet::new(digits).unwrap();
                let positive = encode(n as f64, &alphabet);
                let negative = encode(-(n as f64), &alphabet);
                prop_assert_eq!(negative, format!("-{}", positive));
            }
        }

        #[test]
        fn quarter_fractions_round_trip(n in 0u32..100_000u32, quarters in 0u32..4u32) {
            // n + k/4 terminates in every standard base, so the decoded
            // value must come back within fractional rounding tolerance
            let value = n as f64 + quarters as f64 * 0.25;
            for digits in STANDARD_DIGIT_SETS {
                let alphabet = Alphabet::new(digits).unwrap();
                let decoded = decode(&encode(value, &alphabet), &alphabet).unwrap();
                prop_assert!((decoded - value).abs() < 1e-9,
                    "{} came back as {} in base {}", value, decoded, alphabet.radix());
            }
        }

        #[test]
        fn base_conversion_consistency(n in -10_000_000i64..10_000_000i64) {
            // A -> B -> A preserves the decimal value for integers
            let duo = Alphabet::new("0123456789XE").unwrap();
            let hex = Alphabet::new("0123456789ABCDEF").unwrap();
            let via_hex = decode(&encode(n as f64, &hex), &hex).unwrap();
            let back = decode(&encode(via_hex, &duo), &duo).unwrap();
            prop_assert_eq!(back, n as f64);
        }
    }

    #[test]
    fn zero_canonical_form() {
        for digits in STANDARD_DIGIT_SETS {
            let alphabet = Alphabet::new(digits).unwrap();
            assert_eq!(encode(0.0, &alphabet), "0");
        }
        let unusual = Alphabet::new("@#$").unwrap();
        assert_eq!(encode(0.0, &unusual), "@");
    }
}
