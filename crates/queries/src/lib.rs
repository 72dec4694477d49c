//! Analytical queries over a populated inventory and sales ledger.
//!
//! Every query is a plain function over the domain collections (no IO, no
//! formatting beyond the value types' `Display`).

pub mod best_day;
pub mod listing;
pub mod resistance;
pub mod stock_count;

pub use best_day::{BestDay, StreakPolicy, best_sales_day};
pub use listing::price_sorted_listing;
pub use resistance::{Resistance, total_resistance};
pub use stock_count::filtered_quantity;
