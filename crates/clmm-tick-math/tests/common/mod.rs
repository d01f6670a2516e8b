//! Shared helpers for integration tests

#![allow(dead_code)]

use clmm_tick_math::{u256_to_f64, U256};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Floating-point reference for `sqrt(1.0001^tick) * 2^96`
pub fn reference_sqrt_price(tick: i32) -> f64 {
    (f64::from(tick) * 1.0001f64.ln() / 2.0).exp() * 2f64.powi(96)
}

/// Floating-point reference for the floor tick of a Q64.96 sqrt price
pub fn reference_tick(sqrt_price: U256) -> i32 {
    let price = u256_to_f64(sqrt_price) / 2f64.powi(96);
    (2.0 * price.ln() / 1.0001f64.ln()).floor() as i32
}

/// Relative difference between an exact result and a reference value
pub fn relative_error(actual: U256, expected: f64) -> f64 {
    (u256_to_f64(actual) - expected).abs() / expected
}
