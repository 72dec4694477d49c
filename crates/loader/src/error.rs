use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::StockError;

/// Failure while reading or converting input records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: StockError,
    },

    #[error("line {line}: {field} must not be negative (got {value})")]
    Negative {
        line: usize,
        field: &'static str,
        value: i64,
    },
}
