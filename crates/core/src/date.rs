//! Calendar day of a sale.

use serde::{Serialize, Serializer};

use crate::error::{StockError, StockResult};
use crate::value_object::ValueObject;

/// A validated day/month/year triple.
///
/// Validation is by component range only (day `1..=31`, month `1..=12`, year
/// `1000..=9999`); it does not know month lengths, so `31/02/2020` is accepted.
/// Ordering is chronological: year, then month, then day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SaleDate {
    // Field order drives the derived ordering.
    year: u16,
    month: u8,
    day: u8,
}

impl SaleDate {
    /// Build a date, rejecting out-of-range components.
    ///
    /// Takes wide integers so values parsed from files can be passed through
    /// unchanged and reported verbatim on failure.
    pub fn new(day: i64, month: i64, year: i64) -> StockResult<Self> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1000..=9999).contains(&year)
        {
            return Err(StockError::invalid_date(day, month, year));
        }

        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }
}

impl ValueObject for SaleDate {}

/// Formats as `DD/MM/YYYY`.
impl core::fmt::Display for SaleDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl Serialize for SaleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_zero_padding() {
        let date = SaleDate::new(1, 3, 1990).unwrap();
        assert_eq!(date.to_string(), "01/03/1990");
        assert_eq!((date.day(), date.month(), date.year()), (1, 3, 1990));
    }

    #[test]
    fn rejects_out_of_range_components() {
        for (d, m, y) in [(0, 1, 2020), (32, 1, 2020), (1, 0, 2020), (1, 13, 2020), (1, 1, 999), (1, 1, 10000)] {
            let err = SaleDate::new(d, m, y).unwrap_err();
            assert_eq!(err, StockError::invalid_date(d, m, y));
        }
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(SaleDate::new(31, 12, 9999).is_ok());
        assert!(SaleDate::new(1, 1, 1000).is_ok());
    }

    #[test]
    fn orders_chronologically() {
        let earlier = SaleDate::new(1, 3, 1990).unwrap();
        let later = SaleDate::new(1, 12, 1990).unwrap();
        let next_year = SaleDate::new(1, 1, 1991).unwrap();
        assert!(earlier < later);
        assert!(later < next_year);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: in-range components always construct and round-trip through accessors.
        #[test]
        fn valid_components_construct(day in 1i64..=31, month in 1i64..=12, year in 1000i64..=9999) {
            let date = SaleDate::new(day, month, year).unwrap();
            prop_assert_eq!(i64::from(date.day()), day);
            prop_assert_eq!(i64::from(date.month()), month);
            prop_assert_eq!(i64::from(date.year()), year);
            prop_assert_eq!(date.to_string().len(), 10);
        }
    }
}
