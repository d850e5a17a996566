// ============================================================================
// Operand
// Tagged constructor/operand input: number, text, or another value
// ============================================================================

use super::value::RadixValue;

/// The three input shapes a [`RadixValue`] can be built from or combined
/// with: a decimal number, a radix string, or another value.
///
/// Resolving the shape once at the boundary replaces runtime type
/// inspection; anything else is rejected where untyped data can still
/// reach the API (see `RadixValue::from_json`).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A decimal number, taken as the canonical value
    Number(f64),
    /// A digit string to be decoded under the target alphabet
    Text(String),
    /// Another value, whose decimal value is reused
    Value(RadixValue),
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

macro_rules! operand_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                #[inline]
                fn from(value: $ty) -> Self {
                    Operand::Number(value as f64)
                }
            }
        )*
    };
}

operand_from_number!(f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<&str> for Operand {
    #[inline]
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<RadixValue> for Operand {
    #[inline]
    fn from(value: RadixValue) -> Self {
        Operand::Value(value)
    }
}

impl From<&RadixValue> for Operand {
    #[inline]
    fn from(value: &RadixValue) -> Self {
        Operand::Value(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_number_conversions() {
        assert_eq!(Operand::from(2), Operand::Number(2.0));
        assert_eq!(Operand::from(-3.5), Operand::Number(-3.5));
        assert_eq!(Operand::from(7u8), Operand::Number(7.0));
    }

    #[test]
    fn test_text_conversions() {
        assert_eq!(Operand::from("1010"), Operand::Text("1010".to_string()));
        assert_eq!(
            Operand::from("X.6".to_string()),
            Operand::Text("X.6".to_string())
        );
    }

    #[test]
    fn test_value_conversion() {
        let value = RadixValue::from_decimal(10.0, Alphabet::binary());
        assert_eq!(Operand::from(&value), Operand::Value(value));
    }
}
