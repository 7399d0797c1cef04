// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Almanac.
//!
//! Pure calendar and numeric logic. Text, clocks and reporting are reached
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every operation is synchronous
//! - **No I/O**: no clock reads, parsing, printing or logging
//! - **No external crates**: only std + thiserror + serde derives
//! - **Value semantics**: dates are `Copy`; arithmetic returns new values
//! - **Typed failures**: every failure is a [`DomainError`]
//!
// Public API - what the world sees
pub mod calculator;
pub mod calendar;
pub mod calendar_math;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use calendar_math::{DateShift, Days, Months, Weeks};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use validation::ValidationOutcome;
pub use value_objects::{DateOffset, PercentageRequest, Subject};
