//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use stockroom_observability::LogFormat;
use stockroom_queries::StreakPolicy;

/// Report output format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console listing
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Answer stock queries over an inventory file and a sales file.
#[derive(Debug, Parser)]
#[command(name = "stock-report", version)]
pub struct Args {
    /// Inventory file: `type, id, quantity, price_in_pence[, description]` per line
    #[arg(long, env = "STOCK_INVENTORY_FILE", default_value = "inventory.txt")]
    pub inventory: PathBuf,

    /// Sales file: `DD/MM/YYYY, id, quantity` per line
    #[arg(long, env = "STOCK_SALES_FILE", default_value = "sales.txt")]
    pub sales: PathBuf,

    /// Category counted by the filtered stock query
    #[arg(long, env = "STOCK_TRANSISTOR_TYPE", default_value = "transistor")]
    pub transistor_type: String,

    /// Description matched by the filtered stock query
    #[arg(long, env = "STOCK_TRANSISTOR_MARKER", default_value = "NPN")]
    pub transistor_marker: String,

    /// Category summed by the resistance query
    #[arg(long, env = "STOCK_RESISTOR_TYPE", default_value = "resistor")]
    pub resistor_type: String,

    /// Let the last date in the sales ledger compete for the best sales day
    #[arg(long, env = "STOCK_FLUSH_TRAILING_STREAK")]
    pub flush_trailing_streak: bool,

    /// Also list every recorded sale
    #[arg(long)]
    pub show_sales: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, env = "STOCK_LOG_FORMAT", default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}

/// Resolved settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub inventory_path: PathBuf,
    pub sales_path: PathBuf,
    pub transistor_type: String,
    pub transistor_marker: String,
    pub resistor_type: String,
    pub streak_policy: StreakPolicy,
    pub show_sales: bool,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.txt"),
            sales_path: PathBuf::from("sales.txt"),
            transistor_type: "transistor".to_string(),
            transistor_marker: "NPN".to_string(),
            resistor_type: "resistor".to_string(),
            streak_policy: StreakPolicy::IgnoreTrailing,
            show_sales: false,
            format: OutputFormat::Text,
        }
    }
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        Self {
            inventory_path: args.inventory,
            sales_path: args.sales,
            transistor_type: args.transistor_type,
            transistor_marker: args.transistor_marker,
            resistor_type: args.resistor_type,
            streak_policy: if args.flush_trailing_streak {
                StreakPolicy::FlushTrailing
            } else {
                StreakPolicy::IgnoreTrailing
            },
            show_sales: args.show_sales,
            format: args.format,
        }
    }
}
