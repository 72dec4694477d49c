//! Ordered ledger of admitted sales.

use std::collections::VecDeque;

use stockroom_core::{Price, SaleDate, StockError, StockResult};
use stockroom_inventory::{Inventory, Shortfall};

use crate::sale::Sale;

const COLLECTION: &str = "sales ledger";

/// Why a sale was not recorded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No inventory item carries the requested identifier.
    UnknownItem,
    /// The item exists but holds fewer units than requested.
    InsufficientStock { requested: u32, available: u32 },
}

impl From<Shortfall> for RejectReason {
    fn from(s: Shortfall) -> Self {
        RejectReason::InsufficientStock {
            requested: s.requested,
            available: s.available,
        }
    }
}

/// Result of asking the ledger to record a sale.
///
/// A rejection is an ordinary outcome: nothing was recorded and no stock moved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum SaleOutcome {
    Recorded,
    Rejected(RejectReason),
}

impl SaleOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, SaleOutcome::Recorded)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum End {
    Head,
    Tail,
}

/// Sales in insertion order, with O(1) insertion and removal at both ends.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: VecDeque<Sale>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sell `quantity` of item `id` from `inventory` and record the sale at the tail.
    pub fn record_sale(
        &mut self,
        inventory: &mut Inventory,
        date: SaleDate,
        id: &str,
        quantity: u32,
    ) -> SaleOutcome {
        self.admit(inventory, date, id, quantity, End::Tail)
    }

    /// Same as [`SalesLedger::record_sale`], recording at the head.
    pub fn record_sale_at_head(
        &mut self,
        inventory: &mut Inventory,
        date: SaleDate,
        id: &str,
        quantity: u32,
    ) -> SaleOutcome {
        self.admit(inventory, date, id, quantity, End::Head)
    }

    pub fn count(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn remove_tail(&mut self) -> StockResult<Sale> {
        self.sales
            .pop_back()
            .ok_or(StockError::empty_collection(COLLECTION))
    }

    pub fn remove_head(&mut self) -> StockResult<Sale> {
        self.sales
            .pop_front()
            .ok_or(StockError::empty_collection(COLLECTION))
    }

    pub fn clear(&mut self) {
        self.sales.clear();
    }

    pub fn first(&self) -> Option<&Sale> {
        self.sales.front()
    }

    pub fn last(&self) -> Option<&Sale> {
        self.sales.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sale> + '_ {
        self.sales.iter()
    }

    /// Cost of one sale in the ledger.
    pub fn sale_cost(&self, sale: &Sale) -> Price {
        sale.cost()
    }

    /// Sum of every recorded sale's cost.
    pub fn total(&self) -> Price {
        self.sales.iter().map(Sale::cost).sum()
    }

    fn admit(
        &mut self,
        inventory: &mut Inventory,
        date: SaleDate,
        id: &str,
        quantity: u32,
        end: End,
    ) -> SaleOutcome {
        let Some(key) = inventory.find_key(id) else {
            tracing::warn!(item_id = %id, "stock item not found; sale not recorded");
            return SaleOutcome::Rejected(RejectReason::UnknownItem);
        };
        let Some(item) = inventory.get_mut(key) else {
            return SaleOutcome::Rejected(RejectReason::UnknownItem);
        };

        if let Err(shortfall) = item.sell(quantity) {
            tracing::debug!(
                item_id = %id,
                requested = shortfall.requested,
                available = shortfall.available,
                "insufficient stock; sale not recorded"
            );
            return SaleOutcome::Rejected(shortfall.into());
        }

        let sale = Sale::new(key, date, item.item_id().clone(), quantity, item.unit_price());
        tracing::debug!(item_id = %id, quantity, %date, "sale recorded");

        match end {
            End::Tail => self.sales.push_back(sale),
            End::Head => self.sales.push_front(sale),
        }
        SaleOutcome::Recorded
    }
}
