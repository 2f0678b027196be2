//! Monetary amount type.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw; one display unit is `UNIT_RAW` raw. The
//! concrete currency behind a raw unit is configuration, not engine logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Raw units per display unit.
pub const UNIT_RAW: u128 = 1_000_000;

/// A monetary amount in raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Whole display units (`n * UNIT_RAW` raw).
    pub fn from_units(units: u64) -> Self {
        Self(units as u128 * UNIT_RAW)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self * percentage / 100` with integer division (floor).
    ///
    /// Used for proportional insurance credits, e.g. 150% of the premium.
    pub fn percent(self, percentage: u32) -> Self {
        Self(self.0.saturating_mul(percentage as u128) / 100)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_floors() {
        // 3 raw at 150% = 4.5 → floors to 4
        assert_eq!(Amount::new(3).percent(150), Amount::new(4));
        assert_eq!(Amount::new(100).percent(150), Amount::new(150));
        assert_eq!(Amount::new(0).percent(150), Amount::ZERO);
    }

    #[test]
    fn from_units_scales() {
        assert_eq!(Amount::from_units(1).raw(), UNIT_RAW);
        assert_eq!(Amount::from_units(10).raw(), 10 * UNIT_RAW);
    }

    #[test]
    fn checked_sub_underflow_is_none() {
        assert!(Amount::new(1).checked_sub(Amount::new(2)).is_none());
        assert_eq!(
            Amount::new(2).checked_sub(Amount::new(1)),
            Some(Amount::new(1))
        );
    }

    #[test]
    fn saturating_sub_clamps_to_zero() {
        assert_eq!(Amount::new(1).saturating_sub(Amount::new(5)), Amount::ZERO);
    }
}
