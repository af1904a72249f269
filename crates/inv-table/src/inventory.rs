//! Inventory-table operations.
//!
//! The scoping rules matter here: [`aggregate_by_category`] runs over the
//! *entire* table, while [`insights`] runs over one location's filtered
//! view. That asymmetry comes straight from the dashboard this serves (the
//! category pie shows the whole inventory; the totals are per location).

use inv_core::{CategoryCount, Insights, Result};

use crate::frame::Frame;

/// Required column: location of a row's stock.
pub const LOCATION: &str = "Location";
/// Required column: item name.
pub const ITEM: &str = "Item";
/// Required column: item category.
pub const CATEGORY: &str = "Category";
/// Required column: unit count (numeric).
pub const COUNT: &str = "Count";
/// Required column: monetary value (numeric).
pub const VALUE: &str = "Value";

/// Distinct `Location` values in first-seen order.
pub fn list_locations(frame: &Frame) -> Result<Vec<String>> {
    let idx = frame.require_column(LOCATION)?;
    let mut out: Vec<String> = Vec::new();
    for cell in frame.column(idx) {
        if !out.iter().any(|seen| seen == cell) {
            out.push(cell.to_string());
        }
    }
    Ok(out)
}

/// Exact-match row filter on `Location`.
///
/// An unmatched location yields an empty view with the same columns, not an
/// error.
pub fn filter_by_location(frame: &Frame, location: &str) -> Result<Frame> {
    let idx = frame.require_column(LOCATION)?;
    Ok(frame.filter_rows(idx, |cell| cell == location))
}

/// Group the full table by `Category` and sum `Count` per group.
///
/// Categories come out in first-seen order; null `Count` cells contribute 0.
pub fn aggregate_by_category(frame: &Frame) -> Result<Vec<CategoryCount>> {
    let cat_idx = frame.require_column(CATEGORY)?;
    let counts = frame.numeric_column(COUNT)?;

    let mut out: Vec<CategoryCount> = Vec::new();
    for (row, count) in frame.rows().iter().zip(counts) {
        let category = row[cat_idx].as_str();
        let count = count.unwrap_or(0.0);
        match out.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.count += count,
            None => out.push(CategoryCount::new(category, count)),
        }
    }
    Ok(out)
}

/// Sum `Count` and `Value` over a filtered view.
///
/// An empty view produces zeros.
pub fn insights(filtered: &Frame, location: &str) -> Result<Insights> {
    let total_count: f64 = filtered.numeric_column(COUNT)?.into_iter().flatten().sum();
    let total_value: f64 = filtered.numeric_column(VALUE)?.into_iter().flatten().sum();
    Ok(Insights::new(location, total_count, total_value))
}
