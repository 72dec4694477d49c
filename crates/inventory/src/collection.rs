//! Ordered inventory collection.
//!
//! Items live in a keyed store; the list order is a deque of keys over that store.
//! Sale records hold an [`ItemKey`] instead of a reference, so reordering the
//! inventory never invalidates them and a removed item simply stops resolving.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use stockroom_core::{StockError, StockResult};

use crate::item::StockItem;

const COLLECTION: &str = "inventory";

/// Stable handle to an item held by an [`Inventory`].
///
/// Keys are never reused, including across [`Inventory::clear`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemKey(u64);

/// Ordered sequence of stock items with O(1) insertion and removal at both ends.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: HashMap<ItemKey, StockItem>,
    order: VecDeque<ItemKey>,
    next_key: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the tail.
    pub fn append(&mut self, item: StockItem) -> ItemKey {
        let key = self.store(item);
        self.order.push_back(key);
        key
    }

    /// Add an item at the head.
    pub fn prepend(&mut self, item: StockItem) -> ItemKey {
        let key = self.store(item);
        self.order.push_front(key);
        key
    }

    /// Number of items currently held.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove and return the item at the tail.
    pub fn remove_tail(&mut self) -> StockResult<StockItem> {
        let key = self
            .order
            .pop_back()
            .ok_or(StockError::empty_collection(COLLECTION))?;
        self.release(key)
    }

    /// Remove and return the item at the head.
    pub fn remove_head(&mut self) -> StockResult<StockItem> {
        let key = self
            .order
            .pop_front()
            .ok_or(StockError::empty_collection(COLLECTION))?;
        self.release(key)
    }

    /// First item (in list order) whose identifier matches `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&StockItem> {
        self.iter().find(|item| item.item_id() == id)
    }

    /// Key of the first item whose identifier matches `id` exactly.
    pub fn find_key(&self, id: &str) -> Option<ItemKey> {
        self.iter_keyed()
            .find(|(_, item)| item.item_id() == id)
            .map(|(key, _)| key)
    }

    /// Like [`Inventory::find_by_id`], but a miss is an [`StockError::ItemNotFound`].
    pub fn require(&self, id: &str) -> StockResult<&StockItem> {
        self.find_by_id(id)
            .ok_or_else(|| StockError::not_found(id.into()))
    }

    /// Resolve a key; `None` once the item has been removed.
    pub fn get(&self, key: ItemKey) -> Option<&StockItem> {
        self.items.get(&key)
    }

    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut StockItem> {
        self.items.get_mut(&key)
    }

    pub fn first(&self) -> Option<&StockItem> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&StockItem> {
        self.iter().next_back()
    }

    /// Reorder by ascending unit price. Items with equal prices keep their relative order.
    pub fn sort_by_price(&mut self) {
        let items = &self.items;
        self.order
            .make_contiguous()
            .sort_by_key(|key| items.get(key).map(StockItem::unit_price));
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.order.clear();
        self.items.clear();
    }

    /// Items in list order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &StockItem> + '_ {
        self.order.iter().filter_map(|key| self.items.get(key))
    }

    /// Items in list order, paired with their keys.
    pub fn iter_keyed(&self) -> impl DoubleEndedIterator<Item = (ItemKey, &StockItem)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.items.get(key).map(|item| (*key, item)))
    }

    fn store(&mut self, item: StockItem) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        self.items.insert(key, item);
        key
    }

    fn release(&mut self, key: ItemKey) -> StockResult<StockItem> {
        self.items
            .remove(&key)
            .ok_or(StockError::empty_collection(COLLECTION))
    }
}

impl FromIterator<StockItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = StockItem>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.append(item);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::Price;

    fn item(id: &str, price: u64) -> StockItem {
        StockItem::new("resistor", id, 1, Price::from_minor(price), None)
    }

    fn ids(inventory: &Inventory) -> Vec<String> {
        inventory
            .iter()
            .map(|item| item.item_id().to_string())
            .collect()
    }

    #[test]
    fn append_and_prepend_place_items_at_the_ends() {
        let mut inventory = Inventory::new();
        inventory.append(item("B", 1));
        inventory.prepend(item("A", 1));
        inventory.append(item("C", 1));

        assert_eq!(ids(&inventory), ["A", "B", "C"]);
        assert_eq!(inventory.count(), 3);
        assert_eq!(inventory.first().unwrap().item_id(), "A");
        assert_eq!(inventory.last().unwrap().item_id(), "C");
    }

    #[test]
    fn remove_head_after_single_prepend_returns_it() {
        let mut inventory = Inventory::new();
        inventory.prepend(item("X", 5));
        assert_eq!(inventory.remove_head().unwrap().item_id(), "X");
        assert!(inventory.is_empty());
    }

    #[test]
    fn remove_tail_after_single_append_returns_it() {
        let mut inventory = Inventory::new();
        inventory.append(item("X", 5));
        assert_eq!(inventory.remove_tail().unwrap().item_id(), "X");
        assert!(inventory.is_empty());
    }

    #[test]
    fn removal_relinks_both_ends() {
        let mut inventory: Inventory = ["A", "B", "C"].into_iter().map(|id| item(id, 1)).collect();

        assert_eq!(inventory.remove_tail().unwrap().item_id(), "C");
        assert_eq!(inventory.last().unwrap().item_id(), "B");
        assert_eq!(inventory.remove_head().unwrap().item_id(), "A");
        assert_eq!(ids(&inventory), ["B"]);
    }

    #[test]
    fn remove_on_empty_inventory_reports_error() {
        let mut inventory = Inventory::new();
        let expected = StockError::empty_collection("inventory");

        assert_eq!(inventory.remove_head().unwrap_err(), expected);
        assert_eq!(inventory.remove_tail().unwrap_err(), expected);
        assert_eq!(inventory.count(), 0);
    }

    #[test]
    fn find_by_id_returns_first_match_or_none() {
        let mut inventory = Inventory::new();
        inventory.append(StockItem::new("diode", "1N4004", 194, Price::from_minor(6), None));
        inventory.append(StockItem::new("diode", "1N4004", 7, Price::from_minor(9), None));

        assert_eq!(inventory.find_by_id("1N4004").unwrap().quantity(), 194);
        assert!(inventory.find_by_id("1n4004").is_none());
        assert_eq!(
            inventory.require("BC337").unwrap_err(),
            StockError::not_found("BC337".into())
        );
    }

    #[test]
    fn keys_survive_sorting_and_go_stale_on_removal() {
        let mut inventory = Inventory::new();
        let dear = inventory.append(item("DEAR", 900));
        let cheap = inventory.append(item("CHEAP", 10));

        inventory.sort_by_price();
        assert_eq!(ids(&inventory), ["CHEAP", "DEAR"]);
        assert_eq!(inventory.get(dear).unwrap().item_id(), "DEAR");
        assert_eq!(inventory.find_key("CHEAP"), Some(cheap));

        inventory.remove_tail().unwrap();
        assert!(inventory.get(dear).is_none());
    }

    #[test]
    fn clear_empties_and_never_reuses_keys() {
        let mut inventory = Inventory::new();
        let old = inventory.append(item("A", 1));
        inventory.append(item("B", 2));

        inventory.clear();
        assert!(inventory.is_empty());
        assert!(inventory.first().is_none());
        assert!(inventory.last().is_none());

        let fresh = inventory.append(item("C", 3));
        assert_ne!(old, fresh);
        assert!(inventory.get(old).is_none());
    }

    #[test]
    fn sort_is_noop_on_zero_or_one_item() {
        let mut inventory = Inventory::new();
        inventory.sort_by_price();
        assert!(inventory.is_empty());

        inventory.append(item("ONLY", 3));
        inventory.sort_by_price();
        assert_eq!(ids(&inventory), ["ONLY"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: sorting yields non-decreasing prices, keeps equal prices in
        /// original order, and keeps the same multiset of items.
        #[test]
        fn sort_by_price_is_stable_and_ordered(prices in prop::collection::vec(0u64..20, 0..40)) {
            let mut inventory: Inventory = prices
                .iter()
                .enumerate()
                .map(|(i, price)| item(&i.to_string(), *price))
                .collect();

            inventory.sort_by_price();

            let sorted: Vec<(u64, usize)> = inventory
                .iter()
                .map(|it| (it.unit_price().minor_units(), it.item_id().as_str().parse().unwrap()))
                .collect();

            prop_assert_eq!(sorted.len(), prices.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
                if pair[0].0 == pair[1].0 {
                    prop_assert!(pair[0].1 < pair[1].1);
                }
            }

            let mut original: Vec<(u64, usize)> =
                prices.iter().enumerate().map(|(i, p)| (*p, i)).collect();
            let mut resorted = sorted.clone();
            original.sort();
            resorted.sort();
            prop_assert_eq!(original, resorted);
        }

        /// Property: count after n insertions and k removals is n - k.
        #[test]
        fn count_tracks_insertions_and_removals(
            ends in prop::collection::vec(any::<bool>(), 0..30),
            removals in prop::collection::vec(any::<bool>(), 0..30),
        ) {
            let mut inventory = Inventory::new();
            for (i, at_head) in ends.iter().enumerate() {
                let it = item(&i.to_string(), i as u64);
                if *at_head { inventory.prepend(it); } else { inventory.append(it); }
            }

            let k = removals.len().min(ends.len());
            for from_head in removals.iter().take(k) {
                let removed = if *from_head { inventory.remove_head() } else { inventory.remove_tail() };
                prop_assert!(removed.is_ok());
            }

            prop_assert_eq!(inventory.count(), ends.len() - k);
            prop_assert_eq!(inventory.iter().count(), ends.len() - k);
        }
    }
}
