//! `stockroom-core` — leaf building blocks shared by the stock crates.
//!
//! This crate contains **pure domain** primitives (no IO): identifiers, money,
//! calendar dates and the error model.

pub mod date;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use date::SaleDate;
pub use entity::Entity;
pub use error::{StockError, StockResult};
pub use id::ItemId;
pub use money::Price;
pub use value_object::ValueObject;
