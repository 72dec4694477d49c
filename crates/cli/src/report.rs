//! Running the four stock queries and rendering their results.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use stockroom_core::StockResult;
use stockroom_inventory::{Inventory, StockItem};
use stockroom_loader::{load_inventory_file, load_sales_file};
use stockroom_queries::{
    BestDay, Resistance, best_sales_day, filtered_quantity, price_sorted_listing, total_resistance,
};
use stockroom_sales::{Sale, SalesLedger};

use crate::config::{OutputFormat, ReportConfig};

/// Results of one report run.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Inventory after sales, by ascending unit price.
    pub inventory: Vec<StockItem>,
    pub inventory_count: usize,
    pub best_sales_day: Option<BestDay>,
    /// `None` when the inventory is empty.
    pub filtered_stock: Option<u64>,
    /// `None` when the inventory is empty.
    pub total_resistance: Option<Resistance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<Sale>>,
    #[serde(skip)]
    labels: Labels,
}

#[derive(Debug, Clone, Default)]
struct Labels {
    transistor_type: String,
    transistor_marker: String,
    resistor_type: String,
}

impl Report {
    /// Run every query. Sorts `inventory` by price as a side effect.
    pub fn build(config: &ReportConfig, inventory: &mut Inventory, ledger: &SalesLedger) -> Self {
        let listing = price_sorted_listing(inventory);

        Self {
            inventory_count: inventory.count(),
            inventory: listing,
            best_sales_day: best_sales_day(ledger, config.streak_policy),
            filtered_stock: reported(filtered_quantity(
                inventory,
                &config.transistor_type,
                &config.transistor_marker,
            )),
            total_resistance: reported(total_resistance(inventory, &config.resistor_type)),
            sales: config.show_sales.then(|| ledger.iter().cloned().collect()),
            labels: Labels {
                transistor_type: config.transistor_type.clone(),
                transistor_marker: config.transistor_marker.clone(),
                resistor_type: config.resistor_type.clone(),
            },
        }
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).context("serializing report")?;
        writeln!(out)?;
        Ok(())
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, " --- Stock Program --- ")?;

        writeln!(out, "\nQUERY 1: Inventory (Sorted on increasing price):")?;
        if self.inventory.is_empty() {
            writeln!(out, "\nInventory currently empty.")?;
        }
        for item in &self.inventory {
            write_item(out, item)?;
        }
        writeln!(out, "\nInventory Count: {}.", self.inventory_count)?;

        writeln!(
            out,
            "\nQUERY 2: Date with the greatest sales volume (Based on the day with the highest sales total):"
        )?;
        match &self.best_sales_day {
            Some(best) => writeln!(
                out,
                "{} yielded highest sales volume (£{}).",
                best.date, best.total
            )?,
            None => writeln!(out, "No day yielded a sales total.")?,
        }

        let Labels {
            transistor_type,
            transistor_marker,
            resistor_type,
        } = &self.labels;

        writeln!(
            out,
            "\nQUERY 3: Total {transistor_marker} {transistor_type}s in stock after processing sales:"
        )?;
        match self.filtered_stock {
            Some(count) => writeln!(out, "{count} in stock.")?,
            None => writeln!(out, "Inventory empty.")?,
        }

        writeln!(
            out,
            "\nQUERY 4: Total resistance of all remaining {resistor_type}s in stock:"
        )?;
        match self.total_resistance {
            Some(total) => writeln!(out, "{total}\u{2126} total resistance.")?,
            None => writeln!(out, "Inventory empty.")?,
        }

        if let Some(sales) = &self.sales {
            writeln!(out, "\nSALES:")?;
            if sales.is_empty() {
                writeln!(out, "No sale has been made.")?;
            }
            for sale in sales {
                write_sale(out, sale)?;
            }
        }

        Ok(())
    }
}

/// Load both input files, run the queries and write the report to `out`.
pub fn run(config: &ReportConfig, out: &mut impl Write) -> Result<()> {
    let mut inventory = Inventory::new();
    load_inventory_file(&config.inventory_path, &mut inventory)
        .with_context(|| format!("loading inventory from {}", config.inventory_path.display()))?;

    let mut ledger = SalesLedger::new();
    load_sales_file(&config.sales_path, &mut ledger, &mut inventory)
        .with_context(|| format!("loading sales from {}", config.sales_path.display()))?;

    let report = Report::build(config, &mut inventory, &ledger);
    match config.format {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => report.write_json(out),
    }
}

// Query errors are already logged where they occur.
fn reported<T>(result: StockResult<T>) -> Option<T> {
    result.ok()
}

fn write_item(out: &mut impl Write, item: &StockItem) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Type:              {}", item.category())?;
    writeln!(out, "ID:                {}", item.item_id())?;
    writeln!(out, "Quantity in stock: {}", item.quantity())?;
    writeln!(out, "Price Per Item:    £{}", item.unit_price())?;
    writeln!(out, "Description:       {}", item.description())
}

fn write_sale(out: &mut impl Write, sale: &Sale) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Date:           {}", sale.date())?;
    writeln!(out, "ID:             {}", sale.item_id())?;
    writeln!(out, "Quantity:       {}", sale.quantity())?;
    writeln!(out, "Price per item: £{}", sale.unit_price())?;
    writeln!(out, "Cost of Sale:   £{}", sale.cost())
}
