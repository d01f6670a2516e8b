//! # CLMM Tick Math
//!
//! Conversions between discrete tick indices and Q64.96 sqrt prices for
//! concentrated liquidity pools. It provides:
//!
//! - Tick to sqrt price conversion (`sqrt(1.0001^tick) * 2^96`)
//! - Sqrt price to floor tick conversion
//! - Directional tick membership checks used while a swap moves the price
//! - Domain constants for ticks and sqrt prices
//!
//! Every function is pure. Intermediates are computed with 256-bit integers
//! and results are bit-for-bit identical to the reference on-chain tick math.
//!
//! ## Feature Flags
//!
//! - `serde`: Enables serde derives on value types for off-chain use

pub mod constants;
pub mod errors;
pub mod math;

// Re-export commonly used items
pub use constants::*;
pub use errors::{TickMathError, TickMathResult};
pub use math::*;

pub use ethnum::U256;
