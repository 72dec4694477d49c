//! Flat-file record source for the inventory and sales ledger.
//!
//! Inventory lines look like `resistor, RES_1K5, 120, 2, 1K5` and sales lines like
//! `01/12/2017, CAP_300uF, 10`. Lines are split into raw string records, numeric
//! fields are converted leniently (non-numeric text reads as 0), and the results
//! are loaded into the domain collections.

pub mod error;
pub mod load;
pub mod numeric;
pub mod record;

pub use error::LoadError;
pub use load::{SalesSummary, load_inventory, load_inventory_file, load_sales, load_sales_file};
pub use numeric::lenient_int;
pub use record::{InventoryRecord, SaleRecord};
