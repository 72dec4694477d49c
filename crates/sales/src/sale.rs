use serde::Serialize;

use stockroom_core::{ItemId, Price, SaleDate};
use stockroom_inventory::ItemKey;

/// One admitted sale.
///
/// Holds a non-owning [`ItemKey`] into the inventory plus its own copies of the
/// date and item identifier, so it can still be displayed after the item is gone.
/// The unit price is captured at admission; prices never change once stocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    item: ItemKey,
    date: SaleDate,
    id: ItemId,
    quantity: u32,
    unit_price: Price,
}

impl Sale {
    pub(crate) fn new(
        item: ItemKey,
        date: SaleDate,
        id: ItemId,
        quantity: u32,
        unit_price: Price,
    ) -> Self {
        Self {
            item,
            date,
            id,
            quantity,
            unit_price,
        }
    }

    /// Handle of the sold item in the inventory it was admitted against.
    pub fn item_key(&self) -> ItemKey {
        self.item
    }

    pub fn date(&self) -> SaleDate {
        self.date
    }

    pub fn item_id(&self) -> &ItemId {
        &self.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Unit price times quantity sold.
    pub fn cost(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
