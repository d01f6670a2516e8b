//! # Mathematical Functions
//!
//! Pure fixed-point functions over ticks and Q64.96 sqrt prices.

pub mod big_int;
pub mod tick_boundary;
pub mod tick_math;

// Re-export commonly used functions
pub use big_int::*;
pub use tick_boundary::*;
pub use tick_math::*;
