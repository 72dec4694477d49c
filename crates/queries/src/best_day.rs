//! Date with the highest sales total.
//!
//! The ledger is walked in its own order and consecutive sales sharing a date are
//! summed into a streak. A streak is compared against the best so far when the
//! date changes. Sales for one date must be contiguous; the ledger is not sorted
//! first.

use serde::Serialize;

use stockroom_core::{Price, SaleDate};
use stockroom_sales::SalesLedger;

/// What happens to the streak still open when the walk reaches the end of the ledger.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StreakPolicy {
    /// The final streak is never compared, so the last date in the ledger cannot win.
    /// This reproduces the historical report output.
    #[default]
    IgnoreTrailing,
    /// The final streak is compared like every other.
    FlushTrailing,
}

/// A date and the total value of the streak that made it the best.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct BestDay {
    pub date: SaleDate,
    pub total: Price,
}

/// Find the date whose streak has the strictly greatest total.
///
/// Returns `None` when no compared streak totals more than zero, which includes an
/// empty ledger and, under [`StreakPolicy::IgnoreTrailing`], a ledger holding a
/// single date.
pub fn best_sales_day(ledger: &SalesLedger, policy: StreakPolicy) -> Option<BestDay> {
    let mut best: Option<BestDay> = None;
    let mut streak: Option<BestDay> = None;

    for sale in ledger.iter() {
        match streak.as_mut() {
            Some(open) if open.date == sale.date() => open.total += sale.cost(),
            _ => {
                if let Some(closed) = streak.take() {
                    best = pick(best, closed);
                }
                streak = Some(BestDay {
                    date: sale.date(),
                    total: sale.cost(),
                });
            }
        }
    }

    match (policy, streak) {
        (StreakPolicy::FlushTrailing, Some(open)) => pick(best, open),
        _ => best,
    }
}

// Ties keep the earlier streak.
fn pick(best: Option<BestDay>, candidate: BestDay) -> Option<BestDay> {
    let highest = best.map_or(Price::ZERO, |b| b.total);
    if candidate.total > highest {
        Some(candidate)
    } else {
        best
    }
}
