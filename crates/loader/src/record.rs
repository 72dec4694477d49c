//! Splitting input lines into raw string records and converting them.

use stockroom_core::{Price, SaleDate, StockError};
use stockroom_inventory::StockItem;

use crate::error::LoadError;
use crate::numeric::lenient_int;

/// Category whose description is always replaced with the default.
const DIODE: &str = "diode";

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ' ' | '\t' | '\r' | '\n')
}

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|field| !field.is_empty())
}

/// Raw fields of one inventory line: `type, id, quantity, price, [description]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRecord<'a> {
    pub category: &'a str,
    pub id: &'a str,
    pub quantity: &'a str,
    pub unit_price: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> InventoryRecord<'a> {
    /// Split a line on commas and whitespace. Blank lines yield `None`; missing
    /// trailing fields read as empty text.
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let mut parts = fields(line);
        let category = parts.next()?;

        Some(Self {
            category,
            id: parts.next().unwrap_or_default(),
            quantity: parts.next().unwrap_or_default(),
            unit_price: parts.next().unwrap_or_default(),
            description: parts.next(),
        })
    }

    /// Convert to a stock item. `line` is only used for error reporting.
    pub fn into_item(self, line: usize) -> Result<StockItem, LoadError> {
        let quantity = non_negative(self.quantity, "quantity", line)?;
        let unit_price = non_negative(self.unit_price, "price", line)?;

        let description = match self.category {
            DIODE => None,
            _ => self.description.map(str::to_string),
        };

        Ok(StockItem::new(
            self.category,
            self.id,
            u32::try_from(quantity).unwrap_or(u32::MAX),
            Price::from_minor(unit_price),
            description,
        ))
    }
}

/// Raw fields of one sales line: `day/month/year, id, quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRecord<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub id: &'a str,
    pub quantity: &'a str,
}

impl<'a> SaleRecord<'a> {
    /// Split a line into its date parts and remaining fields. Blank lines yield `None`.
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let mut parts = fields(line);
        let mut date = parts.next()?.splitn(3, '/');

        Some(Self {
            day: date.next().unwrap_or_default(),
            month: date.next().unwrap_or_default(),
            year: date.next().unwrap_or_default(),
            id: parts.next().unwrap_or_default(),
            quantity: parts.next().unwrap_or_default(),
        })
    }

    pub fn date(&self, line: usize) -> Result<SaleDate, LoadError> {
        SaleDate::new(
            lenient_int(self.day),
            lenient_int(self.month),
            lenient_int(self.year),
        )
        .map_err(|source: StockError| LoadError::Record { line, source })
    }

    pub fn quantity(&self, line: usize) -> Result<u32, LoadError> {
        let quantity = non_negative(self.quantity, "quantity", line)?;
        Ok(u32::try_from(quantity).unwrap_or(u32::MAX))
    }
}

fn non_negative(text: &str, field: &'static str, line: usize) -> Result<u64, LoadError> {
    let value = lenient_int(text);
    u64::try_from(value).map_err(|_| LoadError::Negative { line, field, value })
}
