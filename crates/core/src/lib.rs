//! Fundshare Core - allocation engine, contributor view and report rendering.
//!
//! This crate contains the pure business logic for splitting a total amount
//! across contributor and receiver groups. It performs no I/O; the server
//! crate deserializes requests and hands typed values to it.

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod reports;

pub use distribution::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
