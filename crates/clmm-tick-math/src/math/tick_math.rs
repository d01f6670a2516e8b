//! # Tick Math
//!
//! Conversions between ticks and Q64.96 sqrt prices.
//!
//! `get_sqrt_price_at_tick` computes `sqrt(1.0001^tick) * 2^96` by
//! square-and-multiply over the bits of `|tick|` in Q128.128.
//! `get_tick_at_sqrt_price` inverts it with an integer log2 approximation
//! followed by a two-candidate correction, returning the floor tick.

use ethnum::{I256, U256};

use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, Q128};
use crate::errors::{TickMathError, TickMathResult};
use crate::math::big_int::{most_significant_bit, mul_shr_128, shr_rounding_up};

/// Magic sqrt(1.0001) powers for Q128.128 tick math
/// Entry `i` is `sqrt(1.0001^-(2^i)) * 2^128`, one per bit of `|tick|`
const SQRT_1_0001_NEG_POW_2: [U256; 20] = [
    U256::from_words(0, 0xfffcb933bd6fad37aa2d162d1a594001), // 2^0
    U256::from_words(0, 0xfff97272373d413259a46990580e213a), // 2^1
    U256::from_words(0, 0xfff2e50f5f656932ef12357cf3c7fdcc), // 2^2
    U256::from_words(0, 0xffe5caca7e10e4e61c3624eaa0941cd0), // 2^3
    U256::from_words(0, 0xffcb9843d60f6159c9db58835c926644), // 2^4
    U256::from_words(0, 0xff973b41fa98c081472e6896dfb254c0), // 2^5
    U256::from_words(0, 0xff2ea16466c96a3843ec78b326b52861), // 2^6
    U256::from_words(0, 0xfe5dee046a99a2a811c461f1969c3053), // 2^7
    U256::from_words(0, 0xfcbe86c7900a88aedcffc83b479aa3a4), // 2^8
    U256::from_words(0, 0xf987a7253ac413176f2b074cf7815e54), // 2^9
    U256::from_words(0, 0xf3392b0822b70005940c7a398e4b70f3), // 2^10
    U256::from_words(0, 0xe7159475a2c29b7443b29c7fa6e889d9), // 2^11
    U256::from_words(0, 0xd097f3bdfd2022b8845ad8f792aa5825), // 2^12
    U256::from_words(0, 0xa9f746462d870fdf8a65dc1f90e061e5), // 2^13
    U256::from_words(0, 0x70d869a156d2a1b890bb3df62baf32f7), // 2^14
    U256::from_words(0, 0x31be135f97d08fd981231505542fcfa6), // 2^15
    U256::from_words(0, 0x9aa508b5b7a84e1c677de54f3e99bc9),  // 2^16
    U256::from_words(0, 0x5d6af8dedb81196699c329225ee604),   // 2^17
    U256::from_words(0, 0x2216e584f5fa1ea926041bedfe98),     // 2^18
    U256::from_words(0, 0x48a170391f7dc42444e8fa2),          // 2^19
];

/// Fractional bits of log2 resolved by repeated squaring
const LOG2_FRACTION_BITS: u32 = 14;

/// Converts a Q64.64 log2 into a Q128.128 log base sqrt(1.0001):
/// `2^64 / log2(sqrt(1.0001))`
const LOG_SQRT_10001_FROM_LOG2: I256 = I256::new(255_738_958_999_603_826_347_141);

/// Error margins bracketing the truncated log2 estimate, in Q128.128 ticks
const TICK_LOW_ERROR_MARGIN: I256 = I256::new(3_402_992_956_809_132_418_596_140_100_660_247_210);
const TICK_HIGH_ERROR_MARGIN: I256 =
    I256::from_words(0, 0xdb2df09e81959a81455e260799a0632f_u128 as i128);

/// Get sqrt price from tick as a Q64.96
///
/// The result is `sqrt(1.0001^tick) * 2^96` as produced by the reference
/// fixed-point algorithm, rounded up on the final Q128.128 to Q64.96 shift.
pub fn get_sqrt_price_at_tick(tick: i32) -> TickMathResult<U256> {
    if !is_tick_valid(tick) {
        log::debug!("Rejecting tick {} outside [{}, {}]", tick, MIN_TICK, MAX_TICK);
        return Err(TickMathError::InvalidTick(tick));
    }

    let abs_tick = tick.unsigned_abs();

    // Start from 1.0 or sqrt(1.0001^-1) depending on the lowest bit
    let mut ratio = if abs_tick & 0x1 != 0 {
        SQRT_1_0001_NEG_POW_2[0]
    } else {
        Q128
    };

    // Binary decomposition of the remaining bits; MAX_TICK < 2^20
    for (bit, factor) in SQRT_1_0001_NEG_POW_2.iter().enumerate().skip(1) {
        if abs_tick & (1 << bit) != 0 {
            ratio = mul_shr_128(ratio, *factor);
        }
    }

    // Computed for -|tick|, invert for positive ticks
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96
    Ok(shr_rounding_up(ratio, 32))
}

/// Get the floor tick of a Q64.96 sqrt price
///
/// Returns the tick `t` with `get_sqrt_price_at_tick(t) <= sqrt_price` and,
/// when `t < MAX_TICK`, `sqrt_price < get_sqrt_price_at_tick(t + 1)`.
pub fn get_tick_at_sqrt_price(sqrt_price: U256) -> TickMathResult<i32> {
    if !is_sqrt_price_valid(sqrt_price) {
        log::debug!(
            "Rejecting sqrt price {} outside [{}, {}]",
            sqrt_price,
            MIN_SQRT_PRICE,
            MAX_SQRT_PRICE
        );
        return Err(TickMathError::InvalidSqrtPrice(sqrt_price));
    }

    // Widen to Q128.128, at most 193 bits
    let ratio = sqrt_price << 32u32;
    let msb = most_significant_bit(ratio)?;

    // Normalize so the msb sits at bit 127: 2^127 <= r < 2^128
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    // Integer part of log2(sqrt_price / 2^96) in Q64.64
    let mut log_2 = I256::new(i128::from(msb) - 128) << 64u32;

    // Each squaring yields the next fractional bit, starting at 2^-1
    for shift in (64 - LOG2_FRACTION_BITS..64).rev() {
        r = (r * r) >> 127u32;
        if r >> 128u32 != U256::ZERO {
            log_2 |= I256::ONE << shift;
            r >>= 1u32;
        }
    }

    let log_sqrt_10001 = log_2 * LOG_SQRT_10001_FROM_LOG2;

    let tick_low = ((log_sqrt_10001 - TICK_LOW_ERROR_MARGIN) >> 128u32).as_i32();
    let tick_high = ((log_sqrt_10001 + TICK_HIGH_ERROR_MARGIN) >> 128u32).as_i32();

    let tick = if tick_low == tick_high || tick_high > MAX_TICK {
        tick_low
    } else if get_sqrt_price_at_tick(tick_high)? <= sqrt_price {
        tick_high
    } else {
        tick_low
    };

    log::trace!(
        "Floor tick of {}: candidates [{}, {}], selected {}",
        sqrt_price,
        tick_low,
        tick_high,
        tick
    );

    Ok(tick)
}

/// Check if a tick is within the supported range
pub fn is_tick_valid(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Check if a Q64.96 sqrt price is within the supported range
pub fn is_sqrt_price_valid(sqrt_price: U256) -> bool {
    (MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price)
}

/// Sqrt price interval covered by a tick: the inclusive lower boundary and
/// the exclusive upper boundary, `None` for `MAX_TICK`
pub fn sqrt_price_bounds_of_tick(tick: i32) -> TickMathResult<(U256, Option<U256>)> {
    let lower = get_sqrt_price_at_tick(tick)?;
    let upper = if tick < MAX_TICK {
        Some(get_sqrt_price_at_tick(tick + 1)?)
    } else {
        None
    };
    Ok((lower, upper))
}
