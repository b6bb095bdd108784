//! UI module for the seek bar demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level canvas program implementations
//! - **Components** (`components`): Demo-specific UI with Message handling

pub mod components;
pub mod primitives;
pub mod theme;
