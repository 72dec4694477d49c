//! Sales ledger domain module.
//!
//! This crate contains the sale record and the chronological sales ledger.
//! Admitting a sale checks and decrements stock in an [`Inventory`], so the
//! ledger and the inventory never disagree about what was sold.
//!
//! [`Inventory`]: stockroom_inventory::Inventory

pub mod ledger;
pub mod sale;

pub use ledger::{RejectReason, SaleOutcome, SalesLedger};
pub use sale::Sale;
