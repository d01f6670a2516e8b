//! # Tick Math Constants
//!
//! Fixed-point scales and the valid domains of ticks and sqrt prices.

use ethnum::U256;
use static_assertions::const_assert_eq;

// ============================================================================
// Fixed-Point Constants
// ============================================================================

/// Q96 fixed-point scale factor: 2^96, the sqrt price of tick 0
pub const Q96: U256 = U256::from_words(0, 1u128 << 96);

/// Q128 fixed-point scale factor: 2^128, the accumulator's 1.0
pub const Q128: U256 = U256::from_words(1, 0);

// ============================================================================
// Tick Domain
// ============================================================================

/// Minimum tick, the lowest tick whose sqrt price fits the Q64.96 range
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick
pub const MAX_TICK: i32 = -MIN_TICK;

const_assert_eq!(MAX_TICK, 887_272);

// ============================================================================
// Sqrt Price Domain
// ============================================================================

/// Sqrt price at `MIN_TICK`: 4295128739
pub const MIN_SQRT_PRICE: U256 = U256::from_words(0, 4_295_128_739);

/// Sqrt price at `MAX_TICK`:
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_PRICE: U256 =
    U256::from_words(0xfffd8963, 0xefd1fc6a506488495d951d5263988d26);
