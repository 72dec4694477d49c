//! Money stored in the smallest currency unit.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A price or cost in minor currency units (pence).
///
/// Arithmetic stays in integers; conversion to the major unit happens only for
/// display, so `85` always renders as `0.85` and `600` as `6.00`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }

    /// Whole major units (pounds).
    pub fn major_part(&self) -> u64 {
        self.0 / 100
    }

    /// Remaining minor units after the whole major units (pence, `0..100`).
    pub fn minor_part(&self) -> u64 {
        self.0 % 100
    }

    /// Value in major units as a float, for callers that need one.
    pub fn as_major(&self) -> f64 {
        self.major_part() as f64 + self.minor_part() as f64 / 100.0
    }

    /// Cost of `quantity` units at this price. Saturates instead of wrapping.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.major_part(), self.minor_part())
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}
