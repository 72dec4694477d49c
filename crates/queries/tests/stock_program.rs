//! End-to-end: load inventory and sales text, then answer every query.

use std::io::Cursor;

use stockroom_core::{Price, StockError};
use stockroom_inventory::Inventory;
use stockroom_loader::{SalesSummary, load_inventory, load_sales};
use stockroom_queries::{
    StreakPolicy, best_sales_day, filtered_quantity, price_sorted_listing, total_resistance,
};
use stockroom_sales::SalesLedger;

const INVENTORY: &str = "\
resistor, RES_1R5, 41, 1, 1R5
capacitor, CAP_300uF, 585, 85, 300uF
diode, 1N4004, 194, 6, rectifier
transistor, BC337, 10, 12, NPN
resistor, RES_4K7, 100, 2, 4K7
transistor, BC327, 20, 12, PNP
IC, NE555, 3, 600, timer
transistor, 2N2222, 5, 15, NPN
resistor, RES_2M2, 1, 3, 2M2
";

const SALES: &str = "\
03/03/2020, CAP_300uF, 10
03/03/2020, NE555, 1
04/03/2020, BC337, 4
04/03/2020, RES_4K7, 100
04/03/2020, NOT_STOCKED, 1
05/03/2020, 2N2222, 6
06/03/2020, NE555, 2
";

fn loaded() -> (Inventory, SalesLedger, SalesSummary) {
    let mut inventory = Inventory::new();
    load_inventory(Cursor::new(INVENTORY), &mut inventory).unwrap();

    let mut ledger = SalesLedger::new();
    let summary = load_sales(Cursor::new(SALES), &mut ledger, &mut inventory).unwrap();
    (inventory, ledger, summary)
}

#[test]
fn sales_are_admitted_against_stock() {
    let (inventory, ledger, summary) = loaded();

    // NOT_STOCKED is unknown; 2N2222 only has 5.
    assert_eq!(summary, SalesSummary { recorded: 5, rejected: 2 });
    assert_eq!(ledger.count(), 5);
    assert_eq!(inventory.find_by_id("NE555").unwrap().quantity(), 0);
    assert_eq!(inventory.find_by_id("2N2222").unwrap().quantity(), 5);
}

#[test]
fn listing_is_sorted_by_price_with_ties_in_file_order() {
    let (mut inventory, _, _) = loaded();

    let listing = price_sorted_listing(&mut inventory);
    let ids: Vec<&str> = listing.iter().map(|i| i.item_id().as_str()).collect();

    assert_eq!(
        ids,
        [
            "RES_1R5", "RES_4K7", "RES_2M2", "1N4004", "BC337", "BC327", "2N2222", "CAP_300uF",
            "NE555",
        ]
    );
    assert_eq!(listing.len(), inventory.count());
    assert_eq!(listing[0].unit_price().to_string(), "0.01");
    assert_eq!(listing[8].unit_price().to_string(), "6.00");
}

#[test]
fn best_sales_day_over_loaded_ledger() {
    let (_, ledger, _) = loaded();

    // 03/03: 850 + 600 = 1450; 04/03: 48 + 200 = 248; 06/03 (last, never closed): 1200.
    let best = best_sales_day(&ledger, StreakPolicy::IgnoreTrailing).unwrap();
    assert_eq!(best.date.to_string(), "03/03/2020");
    assert_eq!(best.total, Price::from_minor(1450));

    let flushed = best_sales_day(&ledger, StreakPolicy::FlushTrailing).unwrap();
    assert_eq!(flushed.date.to_string(), "03/03/2020");
}

#[test]
fn diode_descriptions_are_replaced() {
    let (inventory, _, _) = loaded();
    assert_eq!(inventory.find_by_id("1N4004").unwrap().description(), "N/A");
}

#[test]
fn npn_transistors_remaining() {
    let (inventory, _, _) = loaded();
    assert_eq!(filtered_quantity(&inventory, "transistor", "NPN"), Ok(6 + 5));
}

#[test]
fn resistance_of_remaining_resistors() {
    let (inventory, _, _) = loaded();

    // 1R5 x 41 = 41 (tenths truncated), 4K7 all sold, 2M2 x 1 = 2 200 000.
    let total = total_resistance(&inventory, "resistor").unwrap();
    assert_eq!(total.ohms(), 2_200_041);
    assert_eq!(total.to_string(), "2M2");
}

#[test]
fn aggregation_queries_report_empty_inventory() {
    let inventory = Inventory::new();
    assert_eq!(
        filtered_quantity(&inventory, "transistor", "NPN"),
        Err(StockError::EmptyInventory)
    );
    assert_eq!(
        total_resistance(&inventory, "resistor"),
        Err(StockError::EmptyInventory)
    );
}
