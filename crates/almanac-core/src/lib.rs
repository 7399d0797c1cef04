//! Almanac Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Almanac:
//! validated calendar arithmetic over the proleptic Gregorian calendar,
//! guarded percentage calculations, and guard-clause validation.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           almanac-cli (CLI)             │
//! │     (Parses text, prints results)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CalendarService, TextDateService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Clock, DateCodec)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     almanac-adapters (Infrastructure)   │
//! │  (SystemClock, FixedClock, PatternCodec)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (CalendarDate, DateOffset, calculator,  │
//! │           guard validation)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use almanac_core::domain::{calendar_math, calculator, CalendarDate, DateOffset, PercentageRequest};
//!
//! let date = CalendarDate::new(2025, 1, 12).unwrap();
//! let shifted = calendar_math::add(date, DateOffset::days(5)).unwrap();
//! assert_eq!(shifted, CalendarDate::new(2025, 1, 17).unwrap());
//!
//! let half = calculator::percentage_of(PercentageRequest::new(100.0, 50.0)).unwrap();
//! assert_eq!(half, 50.0);
//! ```

// Domain layer (stable, pure API)
pub mod domain;

// Application layer (ports + orchestration)
pub mod application;

// Root error type
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CalendarService, TextDateService,
        ports::{Clock, DateCodec},
    };
    pub use crate::domain::{
        CalendarDate, DateOffset, DateShift, Days, Months, PercentageRequest, Subject,
        ValidationOutcome, Weeks, calculator, calendar_math, validation,
    };
    pub use crate::error::{AlmanacError, AlmanacResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
