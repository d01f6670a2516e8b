//! # Tick Boundary Classification
//!
//! Decides whether a sqrt price still belongs to a tick while a swap moves
//! the price in a known direction.
//!
//! The two directions use different checks. A decreasing price is compared
//! once against the tick's lower boundary; the caller guarantees it has not
//! left the tick through the top. An increasing price runs the full inverse
//! conversion.

use ethnum::U256;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::{TickMathError, TickMathResult};
use crate::math::tick_math::{
    get_sqrt_price_at_tick, get_tick_at_sqrt_price, is_sqrt_price_valid, is_tick_valid,
};

/// Inclusive tick interval a swap may travel through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    /// The whole tick domain
    pub const FULL: Self = Self {
        lower: MIN_TICK,
        upper: MAX_TICK,
    };

    /// Create a validated range
    pub fn new(lower: i32, upper: i32) -> TickMathResult<Self> {
        if !is_tick_valid(lower) {
            return Err(TickMathError::InvalidTick(lower));
        }
        if !is_tick_valid(upper) || upper < lower {
            return Err(TickMathError::InvalidTick(upper));
        }
        Ok(Self { lower, upper })
    }

    /// The tick a price moving in the given direction cannot move past
    pub fn extreme_tick(&self, zero_for_one: bool) -> i32 {
        if zero_for_one {
            self.lower
        } else {
            self.upper
        }
    }

    pub fn contains(&self, tick: i32) -> bool {
        (self.lower..=self.upper).contains(&tick)
    }

    /// [`is_sqrt_price_in_tick`] bounded by this range
    pub fn is_sqrt_price_in_tick(&self, sqrt_price: U256, tick: i32, zero_for_one: bool) -> bool {
        is_sqrt_price_in_tick(sqrt_price, tick, self.extreme_tick(zero_for_one), zero_for_one)
    }
}

impl Default for TickRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Check if `sqrt_price` belongs to `tick` during a price move
///
/// * `zero_for_one = true` (price decreasing): member iff
///   `sqrt_price >= get_sqrt_price_at_tick(tick)`. At or below
///   `extreme_tick` (typically `MIN_TICK`) every valid price is a member.
/// * `zero_for_one = false` (price increasing): member iff
///   `get_tick_at_sqrt_price(sqrt_price) == tick`. At or above
///   `extreme_tick` (typically `MAX_TICK`) there is no upper neighbor and
///   only the lower boundary is checked.
///
/// Prices or ticks outside their valid domains belong to no tick.
pub fn is_sqrt_price_in_tick(
    sqrt_price: U256,
    tick: i32,
    extreme_tick: i32,
    zero_for_one: bool,
) -> bool {
    if !is_sqrt_price_valid(sqrt_price) || !is_tick_valid(tick) {
        log::debug!(
            "Sqrt price {} or tick {} outside the valid domain, not a member",
            sqrt_price,
            tick
        );
        return false;
    }

    if zero_for_one {
        is_in_tick_moving_down(sqrt_price, tick, extreme_tick)
    } else {
        is_in_tick_moving_up(sqrt_price, tick, extreme_tick)
    }
}

// Single comparison against the lower boundary
fn is_in_tick_moving_down(sqrt_price: U256, tick: i32, floor_tick: i32) -> bool {
    if tick <= floor_tick {
        return true;
    }
    get_sqrt_price_at_tick(tick).is_ok_and(|lower| sqrt_price >= lower)
}

// Full inverse conversion
fn is_in_tick_moving_up(sqrt_price: U256, tick: i32, ceiling_tick: i32) -> bool {
    if tick >= ceiling_tick {
        return get_sqrt_price_at_tick(tick).is_ok_and(|lower| sqrt_price >= lower);
    }
    get_tick_at_sqrt_price(sqrt_price).is_ok_and(|current| current == tick)
}
