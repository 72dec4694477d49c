use serde::Serialize;

use stockroom_core::{Entity, ItemId, Price};

/// Description used when an inventory line carries none.
pub const DEFAULT_DESCRIPTION: &str = "N/A";

/// One inventory line: a category, an identifier, stock on hand and a unit price.
///
/// Only `quantity` changes after construction, and only through [`StockItem::sell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockItem {
    category: String,
    id: ItemId,
    quantity: u32,
    unit_price: Price,
    description: String,
}

/// A sale asked for more units than were in stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub requested: u32,
    pub available: u32,
}

impl StockItem {
    pub fn new(
        category: impl Into<String>,
        id: impl Into<ItemId>,
        quantity: u32,
        unit_price: Price,
        description: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            id: id.into(),
            quantity,
            unit_price,
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }

    /// Category label (`resistor`, `transistor`, ...).
    pub fn category(&self) -> &str {
        &self.category
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

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Take `quantity` units out of stock.
    ///
    /// Leaves the item untouched when there is not enough stock.
    pub fn sell(&mut self, quantity: u32) -> Result<(), Shortfall> {
        match self.quantity.checked_sub(quantity) {
            Some(remaining) => {
                self.quantity = remaining;
                Ok(())
            }
            None => Err(Shortfall {
                requested: quantity,
                available: self.quantity,
            }),
        }
    }
}

impl Entity for StockItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
