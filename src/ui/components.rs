//! UI Components module - demo-specific composite components
//!
//! Components combine primitives with application logic and may depend on
//! application state types.

pub mod indicator;

pub use indicator::Indicator;
