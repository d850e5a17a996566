// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_value::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Radix Value Example ===\n");

    // The original dozenal walkthrough: two twelfths of a dozen
    let mut a = RadixValue::duodecimal(2).unwrap();
    println!("duodecimal 2        -> {}", a);

    a /= 4;
    println!("divided in place by 4 -> {} (decimal {})", a, a.decimal());

    // Digit strings decode under the alphabet they were written in
    let ten = RadixValue::duodecimal("X").unwrap();
    println!("\nduodecimal \"X\"      -> decimal {}", ten.decimal());
    println!("same value in hex    -> {}", ten.to_base(16).unwrap());
    println!("same value in binary -> {}", ten.to_base(2).unwrap());

    // Arbitrary alphabets work the same way
    let dna = Alphabet::new("ACGT").unwrap();
    let v = RadixValue::new(27, dna).unwrap();
    println!("\n27 in base ACGT      -> {}", v);

    // Arithmetic coerces bare operands through the left alphabet
    let sum = ten.checked_add("E").unwrap();
    println!("\nX + E (duodecimal)   -> {} (decimal {})", sum, sum.decimal());

    // Failures are ordinary errors
    match RadixValue::duodecimal("1A") {
        Ok(_) => unreachable!(),
        Err(err) => println!("\nduodecimal \"1A\"     -> {}", err),
    }
    match ten.checked_div(0) {
        Ok(_) => unreachable!(),
        Err(err) => println!("X / 0                -> {}", err),
    }
}
