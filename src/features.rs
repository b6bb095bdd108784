//! Application features
//!
//! - `attributes`: declarative options read from the config directory

pub mod attributes;

pub use attributes::Attributes;
