// ============================================================================
// Alphabet Module
// Digit alphabets: base definition, validation, built-in tables
// ============================================================================
//
// This module provides:
// - Alphabet: ordered unique digit characters; position = value, length = radix
// - standard_digits / Alphabet::standard: read-only built-in table (2/8/10/12/16)
//
// Design principles:
// - Alphabets are validated once at construction and immutable afterwards
// - '.' and '-' are reserved and can never be digits
// - No mutable global state; the built-in table is a static constant

#[allow(clippy::module_inception)]
mod alphabet;
mod standard;

pub use alphabet::Alphabet;
pub use standard::standard_digits;
