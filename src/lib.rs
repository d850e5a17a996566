// ============================================================================
// Radix Value Library
// Arbitrary-radix numeric values with lossless decimal conversion
// ============================================================================

//! # Radix Value
//!
//! Numbers represented as digit strings in a configurable base/alphabet,
//! converted losslessly to and from a decimal value, with arithmetic
//! between values in the same base.
//!
//! ## Features
//!
//! - **Custom alphabets**: any ordered set of unique characters defines a
//!   base; position is digit value, length is radix
//! - **Signed fractional conversion** both ways, with a bounded
//!   round-half-up policy for non-terminating expansions
//! - **Coercing arithmetic**: bare numbers and digit strings combine with
//!   values through the left operand's alphabet
//! - **Built-in bases** for radix 2, 8, 10, 12 and 16
//!
//! ## Example
//!
//! ```rust
//! use radix_value::prelude::*;
//!
//! // Duodecimal, with the dozenal X/E digits
//! let mut a = RadixValue::duodecimal(2).unwrap();
//! a /= 4;
//! assert_eq!(a.decimal(), 0.5);
//! assert_eq!(a.to_string(), "0.6");
//!
//! // Digit strings decode under the alphabet they were written in
//! let ten = RadixValue::binary("1010").unwrap();
//! assert_eq!(ten.decimal(), 10.0);
//!
//! // ...and re-encode under any other registered base
//! assert_eq!(ten.to_base(16).unwrap(), "A");
//! ```

pub mod alphabet;
pub mod codec;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::alphabet::{standard_digits, Alphabet};
    pub use crate::codec::{decode, encode};
    pub use crate::numeric::{Operand, RadixError, RadixResult, RadixValue};
}
