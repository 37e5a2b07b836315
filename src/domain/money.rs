use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rupee amount held as a decimal, always rounded to whole paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const TARGET_DECIMALS: u32 = 2;

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(Self::round(value))
    }

    /// Whole-unit amount, mostly useful for tests and fixtures.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Amount from integer paise, e.g. `from_minor(12_345)` is `123.45`.
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, Self::TARGET_DECIMALS))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Largest amount a single advance, expense or settlement may carry.
    ///
    /// Running totals stay far below `Decimal::MAX`, so ledger arithmetic cannot overflow.
    pub fn max_entry() -> Self {
        Self::from_units(1_000_000_000_000)
    }

    /// Positive and no larger than [`Money::max_entry`].
    pub fn is_valid_entry(&self) -> bool {
        self.is_positive() && *self <= Self::max_entry()
    }

    /// Equal per-head portion of this amount, `round(amount / count, 2)`.
    ///
    /// The residue `amount - share * count` is left unreconciled.
    pub fn split(self, count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        Self::from_decimal(self.0 / Decimal::from(count as u64))
    }

    // half to even, same as the ledger's historic float rounding
    fn round(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(Self::TARGET_DECIMALS, RoundingStrategy::MidpointNearestEven)
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.is_empty() {
            return None;
        }
        // reject forms Decimal would accept but a ledger entry should not
        if s.contains(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-')) {
            return None;
        }
        let body = s.strip_prefix('-').unwrap_or(s);
        let mut parts = body.split('.');
        let int_part = parts.next()?;
        if int_part.is_empty() || parts.clone().count() > 1 || body.contains('-') {
            return None;
        }

        Decimal::from_str(s).ok().map(Self::from_decimal)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}
