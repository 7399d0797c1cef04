//! Application layer for Almanac.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CalendarService, TextDateService)
//! - **Ports**: Interface definitions (traits) for the clock and date text
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! calendar or numeric rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CalendarService, TextDateService};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, DateCodec};

pub use error::ApplicationError;
