//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `almanac-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clock`: what day it is
//!   - `DateCodec`: date text in and out
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, DateCodec};
