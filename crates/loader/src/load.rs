//! Loading whole inputs into the domain collections.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use stockroom_inventory::Inventory;
use stockroom_sales::{SaleOutcome, SalesLedger};

use crate::error::LoadError;
use crate::record::{InventoryRecord, SaleRecord};

/// What happened to the lines of a sales input.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    pub recorded: usize,
    pub rejected: usize,
}

/// Append one item per non-blank line to `inventory`. Returns the number loaded.
pub fn load_inventory(reader: impl BufRead, inventory: &mut Inventory) -> Result<usize, LoadError> {
    let mut loaded = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = InventoryRecord::tokenize(&line) else {
            continue;
        };

        let item = record.into_item(index + 1)?;
        tracing::debug!(
            line = index + 1,
            item_id = %item.item_id(),
            quantity = item.quantity(),
            "inventory item loaded"
        );
        inventory.append(item);
        loaded += 1;
    }

    Ok(loaded)
}

/// Record one sale per non-blank line at the tail of `ledger`, selling from
/// `inventory`. Rejected sales are counted, not treated as errors; a bad date is.
pub fn load_sales(
    reader: impl BufRead,
    ledger: &mut SalesLedger,
    inventory: &mut Inventory,
) -> Result<SalesSummary, LoadError> {
    let mut summary = SalesSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = SaleRecord::tokenize(&line) else {
            continue;
        };

        let date = record.date(index + 1)?;
        let quantity = record.quantity(index + 1)?;

        match ledger.record_sale(inventory, date, record.id, quantity) {
            SaleOutcome::Recorded => summary.recorded += 1,
            SaleOutcome::Rejected(reason) => {
                tracing::debug!(line = index + 1, item_id = record.id, ?reason, "sale rejected");
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

pub fn load_inventory_file(path: impl AsRef<Path>, inventory: &mut Inventory) -> Result<usize, LoadError> {
    let loaded = load_inventory(open(path.as_ref())?, inventory)?;
    tracing::info!(path = %path.as_ref().display(), loaded, "inventory loaded");
    Ok(loaded)
}

pub fn load_sales_file(
    path: impl AsRef<Path>,
    ledger: &mut SalesLedger,
    inventory: &mut Inventory,
) -> Result<SalesSummary, LoadError> {
    let summary = load_sales(open(path.as_ref())?, ledger, inventory)?;
    tracing::info!(
        path = %path.as_ref().display(),
        recorded = summary.recorded,
        rejected = summary.rejected,
        "sales loaded"
    );
    Ok(summary)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}
