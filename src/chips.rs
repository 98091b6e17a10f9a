//! Money amounts.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::options::RemainderPolicy;

const CENTS_PER_UNIT: i64 = 100;

/// An amount of money, stored as whole cents.
///
/// Bets and starting cash are whole units; pot shares can carry cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chips(i64);

impl Chips {
    /// Zero chips.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole units.
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Splits the amount into `shares` equal parts.
    ///
    /// Cents that do not divide evenly are handed out one at a time to
    /// the first shares under [`RemainderPolicy::FirstSeats`], or dropped
    /// under [`RemainderPolicy::Forfeit`]. Returns an empty vector when
    /// `shares` is zero.
    #[must_use]
    pub fn split(self, shares: usize, policy: RemainderPolicy) -> Vec<Self> {
        if shares == 0 {
            return Vec::new();
        }

        #[expect(clippy::cast_possible_wrap, reason = "share counts are table-sized")]
        let divisor = shares as i64;
        let base = self.0.div_euclid(divisor);
        let remainder = self.0.rem_euclid(divisor) as usize;

        (0..shares)
            .map(|index| match policy {
                RemainderPolicy::FirstSeats if index < remainder => Self(base + 1),
                _ => Self(base),
            })
            .collect()
    }
}

impl Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<usize> for Chips {
    type Output = Self;

    #[expect(clippy::cast_possible_wrap, reason = "seat counts are table-sized")]
    fn mul(self, rhs: usize) -> Self {
        Self(self.0 * rhs as i64)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / CENTS_PER_UNIT.unsigned_abs();
        let cents = abs % CENTS_PER_UNIT.unsigned_abs();

        if cents == 0 {
            write!(f, "{sign}{units}")
        } else {
            write!(f, "{sign}{units}.{cents:02}")
        }
    }
}
