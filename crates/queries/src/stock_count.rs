use stockroom_core::{StockError, StockResult};
use stockroom_inventory::Inventory;

/// Total quantity in stock over items whose category and description both match
/// exactly (case-sensitive), e.g. `transistor` / `NPN`.
pub fn filtered_quantity(inventory: &Inventory, category: &str, description: &str) -> StockResult<u64> {
    if inventory.is_empty() {
        tracing::warn!(category, description, "filtered count over an empty inventory");
        return Err(StockError::EmptyInventory);
    }

    Ok(inventory
        .iter()
        .filter(|item| item.category() == category && item.description() == description)
        .map(|item| u64::from(item.quantity()))
        .sum())
}
