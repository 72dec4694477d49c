//! `stock-report`: load the inventory and sales files and print the four stock queries.

pub mod config;
pub mod report;

pub use config::{Args, OutputFormat, ReportConfig};
pub use report::{Report, run};
