//! Infrastructure adapters for Almanac.
//!
//! This crate implements the ports defined in `almanac-core::application::ports`.
//! It holds the `chrono` dependency and every read of the system clock.

pub mod clock;
pub mod codec;
pub mod convert;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use codec::PatternCodec;
pub use convert::{from_naive_date, to_naive_date};
