//! # inv-table
//!
//! The tabular side of invstat: an immutable in-memory [`Frame`], a CSV
//! reader that produces one, a durable [`UploadStore`] for raw uploads, and
//! the inventory operations (locations, filtering, category aggregation,
//! scalar insights) that the server and CLI run each render cycle.

#![warn(clippy::all)]

pub mod frame;
pub mod inventory;
pub mod reader;
pub mod store;

pub use frame::{Frame, NumericColumn};
pub use reader::parse_csv;
pub use store::UploadStore;
