//! # inv-core
//!
//! Core types and errors shared across the invstat workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{CategoryCount, Insights};

/// invstat version string (from the crate manifest).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
