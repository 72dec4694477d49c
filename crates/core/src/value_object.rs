//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Price`s of 85
/// pence are the same price, two `SaleDate`s of 01/01/2020 are the same day.
///
/// - **Value Object**: `Price`, `SaleDate`, `Resistance`
/// - **Entity**: `StockItem` (identified by its `ItemId`, quantity changes over time)
///
/// ```ignore
/// let a = Price::from_minor(600);
/// let b = Price::from_minor(600);
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
