//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! use cases like "shift this date" or "has this expired yet".

pub mod calendar_service;
pub mod text_date_service;

pub use calendar_service::CalendarService;
pub use text_date_service::TextDateService;
