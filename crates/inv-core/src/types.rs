//! Common data types for invstat

use serde::{Deserialize, Serialize};

/// Per-category sum of `Count` over the whole inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category name
    pub category: String,

    /// Sum of `Count` across all rows in this category
    pub count: f64,
}

impl CategoryCount {
    /// Create a new category aggregate entry
    pub fn new(category: impl Into<String>, count: f64) -> Self {
        Self { category: category.into(), count }
    }
}

/// Scalar insights for one location's filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// The location the view was filtered to
    pub location: String,

    /// Sum of `Count` over the filtered view (0 for an empty view)
    pub total_count: f64,

    /// Sum of `Value` over the filtered view (0 for an empty view)
    pub total_value: f64,
}

impl Insights {
    /// Create a new insights record
    pub fn new(location: impl Into<String>, total_count: f64, total_value: f64) -> Self {
        Self { location: location.into(), total_count, total_value }
    }

    /// Insights for an empty filtered view.
    pub fn empty(location: impl Into<String>) -> Self {
        Self { location: location.into(), total_count: 0.0, total_value: 0.0 }
    }
}
