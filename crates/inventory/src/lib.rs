//! Inventory domain module.
//!
//! This crate contains the stock item record and the ordered inventory
//! collection, implemented purely as in-memory domain logic (no IO).

pub mod collection;
pub mod item;

pub use collection::{Inventory, ItemKey};
pub use item::{DEFAULT_DESCRIPTION, Shortfall, StockItem};
