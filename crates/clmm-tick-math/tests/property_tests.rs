//! Property-based tests for tick math invariants
//!
//! Random ticks and sqrt prices across the full domain exercise
//! monotonicity, the floor property, and both directions of the tick
//! boundary classifier.

mod common;

use clmm_tick_math::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn any_tick() -> impl Strategy<Value = i32> {
    MIN_TICK..=MAX_TICK
}

/// Any valid sqrt price, uniform over the 256-bit input then folded into range
fn any_sqrt_price() -> impl Strategy<Value = U256> {
    (any::<u128>(), any::<u128>()).prop_map(|(hi, lo)| {
        let span = MAX_SQRT_PRICE - MIN_SQRT_PRICE + U256::ONE;
        MIN_SQRT_PRICE + U256::from_words(hi, lo) % span
    })
}

// Price movement spanning everything from a single unit up to the whole domain
prop_compose! {
    fn price_delta()(
        magnitude in any::<u128>(),
        scale in 0u32..=192,
    ) -> U256 {
        (U256::from(magnitude) << 64u32) >> scale
    }
}

// ============================================================================
// Conversion Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_sqrt_price_is_strictly_monotonic(a in any_tick(), b in any_tick()) {
        prop_assume!(a != b);
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        let low_price = get_sqrt_price_at_tick(low).unwrap();
        let high_price = get_sqrt_price_at_tick(high).unwrap();
        prop_assert!(
            low_price < high_price,
            "sqrt price at {} ({}) not below sqrt price at {} ({})",
            low, low_price, high, high_price
        );
    }

    #[test]
    fn prop_sqrt_price_stays_in_domain(tick in any_tick()) {
        let sqrt_price = get_sqrt_price_at_tick(tick).unwrap();
        prop_assert!(is_sqrt_price_valid(sqrt_price));
    }

    #[test]
    fn prop_round_trip_returns_original_tick(tick in any_tick()) {
        let sqrt_price = get_sqrt_price_at_tick(tick).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_price(sqrt_price).unwrap(), tick);
    }

    #[test]
    fn prop_tick_is_floor_of_sqrt_price(sqrt_price in any_sqrt_price()) {
        common::init_logger();

        let tick = get_tick_at_sqrt_price(sqrt_price).unwrap();
        prop_assert!(is_tick_valid(tick));
        prop_assert!(get_sqrt_price_at_tick(tick).unwrap() <= sqrt_price);
        if tick < MAX_TICK {
            prop_assert!(sqrt_price < get_sqrt_price_at_tick(tick + 1).unwrap());
        }
    }

    #[test]
    fn prop_floor_holds_next_to_boundaries(tick in MIN_TICK + 1..=MAX_TICK) {
        let boundary = get_sqrt_price_at_tick(tick).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_price(boundary - U256::ONE).unwrap(), tick - 1);
        if tick < MAX_TICK {
            prop_assert_eq!(get_tick_at_sqrt_price(boundary + U256::ONE).unwrap(), tick);
        }
    }

    #[test]
    fn prop_rejects_ticks_outside_domain(offset in 1i32..1_000_000) {
        prop_assert_eq!(
            get_sqrt_price_at_tick(MAX_TICK + offset),
            Err(TickMathError::InvalidTick(MAX_TICK + offset))
        );
        prop_assert_eq!(
            get_sqrt_price_at_tick(MIN_TICK - offset),
            Err(TickMathError::InvalidTick(MIN_TICK - offset))
        );
    }
}

// ============================================================================
// Boundary Classifier Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_in_tick_moving_down(tick in MIN_TICK..MAX_TICK, delta in price_delta()) {
        // Start from the next tick's boundary and move down, clamped at the floor
        let start = get_sqrt_price_at_tick(tick + 1).unwrap();
        let sqrt_price = if start > MIN_SQRT_PRICE + delta {
            start - delta
        } else {
            MIN_SQRT_PRICE
        };

        let expected = sqrt_price >= get_sqrt_price_at_tick(tick).unwrap();
        prop_assert_eq!(is_sqrt_price_in_tick(sqrt_price, tick, MIN_TICK, true), expected);
    }

    #[test]
    fn prop_in_tick_moving_up(tick in any_tick(), delta in price_delta()) {
        // Start from the tick's own boundary and move up, clamped at the ceiling
        let start = get_sqrt_price_at_tick(tick).unwrap();
        let sqrt_price = if MAX_SQRT_PRICE - start > delta {
            start + delta
        } else {
            MAX_SQRT_PRICE
        };

        let expected = get_tick_at_sqrt_price(sqrt_price).unwrap() == tick;
        prop_assert_eq!(is_sqrt_price_in_tick(sqrt_price, tick, MAX_TICK, false), expected);
    }

    #[test]
    fn prop_full_range_matches_explicit_extremes(
        sqrt_price in any_sqrt_price(),
        tick in any_tick(),
        zero_for_one in any::<bool>(),
    ) {
        let extreme_tick = if zero_for_one { MIN_TICK } else { MAX_TICK };
        prop_assert_eq!(
            TickRange::FULL.is_sqrt_price_in_tick(sqrt_price, tick, zero_for_one),
            is_sqrt_price_in_tick(sqrt_price, tick, extreme_tick, zero_for_one)
        );
    }
}
