//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the stock crates.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// Every failure the collections and queries can report. None of these abort the
/// process; the boundary layer decides what to do with them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A date component was outside its accepted range.
    #[error("invalid date {day}/{month}/{year}")]
    InvalidDate { day: i64, month: i64, year: i64 },

    /// Removal was requested on a collection with no elements.
    #[error("cannot remove from an empty {collection}")]
    EmptyCollection { collection: &'static str },

    /// No stock item carries the requested identifier.
    #[error("stock item {0} not found")]
    ItemNotFound(ItemId),

    /// An aggregation query ran against an inventory with no items.
    #[error("inventory is empty")]
    EmptyInventory,
}

impl StockError {
    pub fn invalid_date(day: i64, month: i64, year: i64) -> Self {
        Self::InvalidDate { day, month, year }
    }

    pub fn empty_collection(collection: &'static str) -> Self {
        Self::EmptyCollection { collection }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::ItemNotFound(id)
    }
}
