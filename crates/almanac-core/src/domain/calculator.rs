//! Guarded percentage arithmetic.
//!
//! Inputs are checked in a fixed order and the first violation is returned:
//!
//! 1. `total` is finite and not negative
//! 2. `rate` is finite
//! 3. `rate` is within `0..=100`
//!
//! The result is checked again after the arithmetic. Nothing here prints or
//! logs; reporting a failure is the caller's business.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::PercentageRequest;

pub const MAX_RATE: f64 = 100.0;

/// Check a total: finite and not negative.
pub fn check_total(total: f64) -> DomainResult<f64> {
    if !total.is_finite() {
        return Err(DomainError::invalid_argument(
            "total",
            total,
            "must be a finite number",
        ));
    }
    if total < 0.0 {
        return Err(DomainError::invalid_argument(
            "total",
            total,
            "must not be negative",
        ));
    }
    Ok(total)
}

/// Check a percentage rate: finite and within `0..=100`.
pub fn check_rate(rate: f64) -> DomainResult<f64> {
    if !rate.is_finite() {
        return Err(DomainError::invalid_argument(
            "rate",
            rate,
            "must be a finite number",
        ));
    }
    if !(0.0..=MAX_RATE).contains(&rate) {
        return Err(DomainError::invalid_argument(
            "rate",
            rate,
            "must be between 0 and 100",
        ));
    }
    Ok(rate)
}

fn check_result(value: f64, operation: &'static str) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::ArithmeticFailure { operation })
    }
}

/// `rate` percent of `total`.
///
/// # Errors
///
/// - [`DomainError::InvalidArgument`] for the first input that fails its check
/// - [`DomainError::ArithmeticFailure`] if the product is not finite
pub fn percentage_of(request: PercentageRequest) -> DomainResult<f64> {
    let total = check_total(request.total)?;
    let rate = check_rate(request.rate)?;
    check_result(total * rate / MAX_RATE, "percentage calculation")
}

/// `total` with `rate` percent taken off.
///
/// # Errors
///
/// Same as [`percentage_of`].
pub fn discounted_total(request: PercentageRequest) -> DomainResult<f64> {
    let discount = percentage_of(request)?;
    check_result(request.total - discount, "discount calculation")
}
