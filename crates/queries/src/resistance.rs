//! Total resistance of resistors in stock, in BS 1852 letter coding.
//!
//! A code such as `4K7` reads as digits, a multiplier letter standing in for the
//! decimal point, then the tenths: `R` is ohms, `K` kilohms, `M` megohms. So
//! `4K7` is 4700 Ω, `1M0` is 1 000 000 Ω and `330` (no letter) is 330 Ω.

use serde::{Serialize, Serializer};

use stockroom_core::{StockError, StockResult, ValueObject};
use stockroom_inventory::Inventory;

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;

/// A resistance in whole ohms.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resistance(u64);

impl Resistance {
    pub fn from_ohms(ohms: u64) -> Self {
        Self(ohms)
    }

    pub fn ohms(&self) -> u64 {
        self.0
    }

    /// Decode a letter-coded value.
    ///
    /// Digits before the letter are the whole part, digits after it are added as
    /// tenths (`1K5` is 1.5 kΩ), and the result is truncated to whole ohms.
    /// The last letter seen is the multiplier; any letter other than `K` or `M`
    /// means ohms. Characters that are neither digits nor letters are skipped.
    pub fn decode(code: &str) -> Self {
        let mut whole: u64 = 0;
        let mut tenths: u64 = 0;
        let mut multiplier = 1;
        let mut after_letter = false;

        for c in code.chars() {
            if c.is_ascii_alphabetic() {
                multiplier = match c {
                    'K' => KILO,
                    'M' => MEGA,
                    _ => 1,
                };
                after_letter = true;
            } else if let Some(digit) = c.to_digit(10) {
                let part = if after_letter { &mut tenths } else { &mut whole };
                *part = part.saturating_mul(10).saturating_add(u64::from(digit));
            }
        }

        let scaled_tenths = whole.saturating_mul(10).saturating_add(tenths);
        Self(scaled_tenths.saturating_mul(multiplier) / 10)
    }

    /// Scale by a stock quantity.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl ValueObject for Resistance {}

/// Encodes with one digit after the letter, truncating: 3330 Ω is `3K3`,
/// 330 Ω is `330R0`.
impl core::fmt::Display for Resistance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ohms = self.0;
        let (unit, letter) = if ohms < KILO {
            (1, 'R')
        } else if ohms < MEGA {
            (KILO, 'K')
        } else {
            (MEGA, 'M')
        };

        // `unit / 10` is zero for plain ohms, where there are no tenths to show.
        let tenth = match unit / 10 {
            0 => 0,
            step => (ohms % unit) / step,
        };
        write!(f, "{}{}{}", ohms / unit, letter, tenth)
    }
}

impl Serialize for Resistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sum of decoded description times quantity over in-stock items of `category`.
pub fn total_resistance(inventory: &Inventory, category: &str) -> StockResult<Resistance> {
    if inventory.is_empty() {
        tracing::warn!(category, "resistance total over an empty inventory");
        return Err(StockError::EmptyInventory);
    }

    let ohms = inventory
        .iter()
        .filter(|item| item.category() == category && item.quantity() > 0)
        .map(|item| Resistance::decode(item.description()).times(item.quantity()).ohms())
        .fold(0u64, u64::saturating_add);

    Ok(Resistance(ohms))
}
