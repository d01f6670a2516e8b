//! # Tick Math Errors
//!
//! Input validation failures. Both are fatal to the calling operation:
//! callers abort instead of clamping.

use ethnum::U256;
use thiserror::Error;

/// Errors returned by tick and sqrt price conversions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMathError {
    /// Tick outside `[MIN_TICK, MAX_TICK]`
    #[error("Invalid tick: {0}")]
    InvalidTick(i32),

    /// Sqrt price outside `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`
    #[error("Invalid sqrt price: {0}")]
    InvalidSqrtPrice(U256),

    #[error("Zero value has no most significant bit")]
    ZeroValue,
}

/// Result type using tick math errors
pub type TickMathResult<T> = Result<T, TickMathError>;
