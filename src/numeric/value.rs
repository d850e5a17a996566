// ============================================================================
// Radix Value
// A decimal value paired with its digit-string representation in one base
// ============================================================================

use super::errors::{RadixError, RadixResult};
use super::operand::Operand;
use crate::alphabet::Alphabet;
use crate::codec::{decode, encode};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number carried in two synchronized representations: its decimal value
/// and its digit string under one fixed alphabet.
///
/// Arithmetic always runs on the decimal value; the digit string is
/// re-derived afterwards. A bare right-hand operand (number or text) is
/// coerced using the *left* operand's alphabet, and results keep the left
/// alphabet.
///
/// # Example
/// ```
/// use radix_value::prelude::*;
///
/// let mut a = RadixValue::duodecimal(2).unwrap();
/// a /= 4;
/// assert_eq!(a.decimal(), 0.5);
/// assert_eq!(a.to_string(), "0.6");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadixValue {
    /// The alphabet the value is rendered in, fixed for the value's lifetime
    alphabet: Alphabet,
    /// The canonical decimal value all arithmetic runs on
    value: f64,
    /// The digit-string rendering of `value` under `alphabet`
    text: String,
}

impl RadixValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a value from any operand shape under the given alphabet.
    ///
    /// A number becomes the decimal value and is encoded; a digit string is
    /// decoded and stored verbatim; another value contributes its decimal
    /// value and is re-encoded (the base-conversion path).
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode under the
    /// alphabet.
    pub fn new(input: impl Into<Operand>, alphabet: Alphabet) -> RadixResult<Self> {
        match input.into() {
            Operand::Number(value) => Ok(Self::from_decimal(value, alphabet)),
            Operand::Text(text) => Self::from_text(&text, alphabet),
            Operand::Value(source) => Ok(Self::from_value(&source, alphabet)),
        }
    }

    /// Build from a decimal value; the digit string is derived by encoding.
    pub fn from_decimal(value: f64, alphabet: Alphabet) -> Self {
        let text = encode(value, &alphabet);
        Self {
            alphabet,
            value,
            text,
        }
    }

    /// Build from a digit string; the decimal value is derived by decoding.
    ///
    /// The input text is stored verbatim, not re-normalized: extraneous
    /// leading zeros or a dangling separator survive as given, so `text()`
    /// is not always what encoding `decimal()` would produce. In-place
    /// arithmetic later replaces the stored text with the encoded form.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when the text contains characters outside the
    /// alphabet.
    pub fn from_text(text: &str, alphabet: Alphabet) -> RadixResult<Self> {
        let value = decode(text, &alphabet)?;
        Ok(Self {
            alphabet,
            value,
            text: text.to_string(),
        })
    }

    /// Build from another value under a (possibly different) alphabet.
    ///
    /// The decimal value is reused and re-encoded under the new alphabet:
    /// a base-conversion copy, not an identity copy.
    pub fn from_value(source: &RadixValue, alphabet: Alphabet) -> Self {
        tracing::debug!(
            from_radix = source.radix(),
            to_radix = alphabet.radix(),
            "re-encoding value under a new alphabet"
        );
        Self::from_decimal(source.value, alphabet)
    }

    /// A binary (`01`) value.
    pub fn binary(input: impl Into<Operand>) -> RadixResult<Self> {
        Self::new(input, Alphabet::binary())
    }

    /// A duodecimal (`0123456789XE`) value.
    pub fn duodecimal(input: impl Into<Operand>) -> RadixResult<Self> {
        Self::new(input, Alphabet::duodecimal())
    }

    /// A hexadecimal (`0123456789ABCDEF`) value.
    pub fn hexadecimal(input: impl Into<Operand>) -> RadixResult<Self> {
        Self::new(input, Alphabet::hexadecimal())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The alphabet this value is rendered in.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The base of this value's alphabet.
    #[inline]
    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// The decimal representation.
    #[inline]
    pub fn decimal(&self) -> f64 {
        self.value
    }

    /// The digit-string representation.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Render the decimal value in another standard base.
    ///
    /// # Errors
    /// Returns `UnsupportedRadix` when no built-in alphabet exists for the
    /// requested radix.
    pub fn to_base(&self, radix: usize) -> RadixResult<String> {
        let alphabet = Alphabet::standard(radix)?;
        Ok(encode(self.value, &alphabet))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode under this
    /// value's alphabet.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> RadixResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::from_decimal(self.value + rhs, self.alphabet.clone()))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode under this
    /// value's alphabet.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> RadixResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::from_decimal(self.value - rhs, self.alphabet.clone()))
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode under this
    /// value's alphabet.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> RadixResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::from_decimal(self.value * rhs, self.alphabet.clone()))
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, or `InvalidDigit` when a
    /// text operand does not decode under this value's alphabet.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> RadixResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        if rhs == 0.0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(Self::from_decimal(self.value / rhs, self.alphabet.clone()))
    }

    /// Checked exponentiation.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when zero is raised to a negative power, or
    /// `InvalidDigit` when a text operand does not decode under this value's
    /// alphabet.
    pub fn checked_pow(&self, rhs: impl Into<Operand>) -> RadixResult<Self> {
        let exponent = self.operand_value(rhs.into())?;
        if self.value == 0.0 && exponent < 0.0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(Self::from_decimal(self.value.powf(exponent), self.alphabet.clone()))
    }

    // ========================================================================
    // In-Place Arithmetic
    // ========================================================================
    //
    // The operand is resolved before any field is written, so a failed
    // operation leaves the value untouched. Mutation re-encodes the digit
    // string, normalizing any verbatim-stored input text.

    /// Checked in-place addition.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode; the value
    /// is left unchanged on failure.
    pub fn checked_add_assign(&mut self, rhs: impl Into<Operand>) -> RadixResult<()> {
        let rhs = self.operand_value(rhs.into())?;
        self.set_value(self.value + rhs);
        Ok(())
    }

    /// Checked in-place subtraction.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode; the value
    /// is left unchanged on failure.
    pub fn checked_sub_assign(&mut self, rhs: impl Into<Operand>) -> RadixResult<()> {
        let rhs = self.operand_value(rhs.into())?;
        self.set_value(self.value - rhs);
        Ok(())
    }

    /// Checked in-place multiplication.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when a text operand does not decode; the value
    /// is left unchanged on failure.
    pub fn checked_mul_assign(&mut self, rhs: impl Into<Operand>) -> RadixResult<()> {
        let rhs = self.operand_value(rhs.into())?;
        self.set_value(self.value * rhs);
        Ok(())
    }

    /// Checked in-place division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `InvalidDigit`; the value is left
    /// unchanged on failure.
    pub fn checked_div_assign(&mut self, rhs: impl Into<Operand>) -> RadixResult<()> {
        let rhs = self.operand_value(rhs.into())?;
        if rhs == 0.0 {
            return Err(RadixError::DivisionByZero);
        }
        self.set_value(self.value / rhs);
        Ok(())
    }

    /// Checked in-place exponentiation.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `InvalidDigit`; the value is left
    /// unchanged on failure.
    pub fn checked_pow_assign(&mut self, rhs: impl Into<Operand>) -> RadixResult<()> {
        let exponent = self.operand_value(rhs.into())?;
        if self.value == 0.0 && exponent < 0.0 {
            return Err(RadixError::DivisionByZero);
        }
        self.set_value(self.value.powf(exponent));
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Resolve an operand to its decimal value, coercing bare text through
    /// this value's own alphabet.
    fn operand_value(&self, operand: Operand) -> RadixResult<f64> {
        match operand {
            Operand::Number(value) => Ok(value),
            Operand::Text(text) => decode(&text, &self.alphabet),
            Operand::Value(value) => Ok(value.value),
        }
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
        self.text = encode(value, &self.alphabet);
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================
//
// The checked_* methods are the fallible API; the operator impls trade the
// Result for a panic on an undecodable text operand or a zero divisor.

macro_rules! binary_op {
    ($trait:ident, $method:ident, $checked:ident, $expect:expr) => {
        impl<R: Into<Operand>> $trait<R> for &RadixValue {
            type Output = RadixValue;

            fn $method(self, rhs: R) -> RadixValue {
                self.$checked(rhs).expect($expect)
            }
        }

        impl<R: Into<Operand>> $trait<R> for RadixValue {
            type Output = RadixValue;

            fn $method(self, rhs: R) -> RadixValue {
                self.$checked(rhs).expect($expect)
            }
        }
    };
}

binary_op!(Add, add, checked_add, "operand must decode under the left alphabet");
binary_op!(Sub, sub, checked_sub, "operand must decode under the left alphabet");
binary_op!(Mul, mul, checked_mul, "operand must decode under the left alphabet");
binary_op!(Div, div, checked_div, "radix value division by zero");

macro_rules! assign_op {
    ($trait:ident, $method:ident, $checked:ident, $expect:expr) => {
        impl<R: Into<Operand>> $trait<R> for RadixValue {
            fn $method(&mut self, rhs: R) {
                self.$checked(rhs).expect($expect)
            }
        }
    };
}

assign_op!(AddAssign, add_assign, checked_add_assign, "operand must decode under the left alphabet");
assign_op!(SubAssign, sub_assign, checked_sub_assign, "operand must decode under the left alphabet");
assign_op!(MulAssign, mul_assign, checked_mul_assign, "operand must decode under the left alphabet");
assign_op!(DivAssign, div_assign, checked_div_assign, "radix value division by zero");

// Reflected forms: a bare decimal on the left takes the value's alphabet
macro_rules! reflected_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&RadixValue> for f64 {
            type Output = RadixValue;

            fn $method(self, rhs: &RadixValue) -> RadixValue {
                RadixValue::from_decimal(self $op rhs.value, rhs.alphabet.clone())
            }
        }
    };
}

reflected_op!(Add, add, +);
reflected_op!(Sub, sub, -);
reflected_op!(Mul, mul, *);

impl Div<&RadixValue> for f64 {
    type Output = RadixValue;

    fn div(self, rhs: &RadixValue) -> RadixValue {
        RadixValue::from_decimal(self, rhs.alphabet.clone())
            .checked_div(rhs)
            .expect("radix value division by zero")
    }
}

impl Neg for &RadixValue {
    type Output = RadixValue;

    fn neg(self) -> RadixValue {
        RadixValue::from_decimal(-self.value, self.alphabet.clone())
    }
}

impl Neg for RadixValue {
    type Output = RadixValue;

    fn neg(self) -> RadixValue {
        RadixValue::from_decimal(-self.value, self.alphabet)
    }
}

// ============================================================================
// Comparison
// ============================================================================
//
// Ordering and equality run on the decimal value alone; the alphabet plays
// no part, so values in different bases compare by magnitude. f64 semantics
// rule out Eq/Ord/Hash.

impl PartialEq for RadixValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for RadixValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl PartialEq<f64> for RadixValue {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd<f64> for RadixValue {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialEq<RadixValue> for f64 {
    #[inline]
    fn eq(&self, other: &RadixValue) -> bool {
        *self == other.value
    }
}

// A bare digit string coerces through the value's own alphabet; text that
// does not decode compares unequal (and unordered)
impl PartialEq<&str> for RadixValue {
    fn eq(&self, other: &&str) -> bool {
        decode(other, &self.alphabet).map_or(false, |v| self.value == v)
    }
}

impl PartialOrd<&str> for RadixValue {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        decode(other, &self.alphabet)
            .ok()
            .and_then(|v| self.value.partial_cmp(&v))
    }
}

impl PartialOrd<RadixValue> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &RadixValue) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for RadixValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

// ============================================================================
// JSON Boundary
// ============================================================================

#[cfg(feature = "serde")]
impl RadixValue {
    /// Build a value from untyped JSON input.
    ///
    /// JSON numbers and strings map to the number and text operand shapes;
    /// every other JSON kind is rejected.
    ///
    /// # Errors
    /// Returns `UnsupportedType` for null, booleans, arrays, objects and
    /// non-finite numbers, or `InvalidDigit` when a string does not decode.
    pub fn from_json(input: &serde_json::Value, alphabet: Alphabet) -> RadixResult<Self> {
        match input {
            serde_json::Value::Number(n) => {
                let value = n
                    .as_f64()
                    .ok_or(RadixError::UnsupportedType("non-finite JSON number"))?;
                Ok(Self::from_decimal(value, alphabet))
            },
            serde_json::Value::String(text) => Self::from_text(text, alphabet),
            serde_json::Value::Null => Err(RadixError::UnsupportedType("JSON null")),
            serde_json::Value::Bool(_) => Err(RadixError::UnsupportedType("JSON boolean")),
            serde_json::Value::Array(_) => Err(RadixError::UnsupportedType("JSON array")),
            serde_json::Value::Object(_) => Err(RadixError::UnsupportedType("JSON object")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
