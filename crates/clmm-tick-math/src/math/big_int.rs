//! Big integer helpers for Q128.128 fixed-point arithmetic
//!
//! Thin wrappers over `ethnum::U256` shared by the tick converters.

use ethnum::U256;

use crate::errors::{TickMathError, TickMathResult};

/// Multiply two Q128.128 values and keep the top 128 bits of the fraction,
/// i.e. `(a * b) >> 128`
///
/// The product must fit in 256 bits. Tick math only multiplies an
/// accumulator `<= 2^128` by a factor `< 2^128`.
#[inline]
pub fn mul_shr_128(a: U256, b: U256) -> U256 {
    (a * b) >> 128u32
}

/// Shift right by `shift` bits, adding one when any discarded bit is set
#[inline]
pub fn shr_rounding_up(value: U256, shift: u32) -> U256 {
    let shifted = value >> shift;
    let mask = (U256::ONE << shift) - U256::ONE;
    if value & mask != U256::ZERO {
        shifted + U256::ONE
    } else {
        shifted
    }
}

/// Index of the most significant set bit
pub fn most_significant_bit(value: U256) -> TickMathResult<u32> {
    if value == U256::ZERO {
        return Err(TickMathError::ZeroValue);
    }
    Ok(255 - value.leading_zeros())
}

/// Lossy conversion to `f64` for diagnostics. Never used by the converters.
pub fn u256_to_f64(value: U256) -> f64 {
    let (hi, lo) = value.into_words();
    hi as f64 * 2f64.powi(128) + lo as f64
}
