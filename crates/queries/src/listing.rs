use stockroom_inventory::{Inventory, StockItem};

/// Sort the inventory by ascending unit price (in place) and snapshot it in that order.
pub fn price_sorted_listing(inventory: &mut Inventory) -> Vec<StockItem> {
    inventory.sort_by_price();
    inventory.iter().cloned().collect()
}
