//! Money type for representing prices.
//!
//! The storefront sells in a single currency. Amounts are stored in cents
//! (hundredths of the currency unit) so totals stay exact; every operation
//! saturates instead of overflowing so cart totals stay total functions.
//!
//! On the wire a price is any JSON number in whole currency units. Fractional
//! values are rounded to the nearest cent, halves away from zero.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create an amount of whole currency units.
    pub const fn new(amount: i64) -> Self {
        Self(amount.saturating_mul(CENTS_PER_UNIT))
    }

    /// Create an amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from a decimal value, rounded to the nearest cent.
    ///
    /// Values outside the representable range saturate; NaN becomes zero.
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents.
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// `self` as a whole percentage of `whole`, rounded half-up.
    ///
    /// Returns 0 when `whole` is not positive.
    pub fn percent_of(&self, whole: Money) -> u32 {
        if !whole.is_positive() {
            return 0;
        }

        let part = i128::from(self.0);
        let whole = i128::from(whole.0);
        let rounded = (part * 200 + whole).div_euclid(whole * 2);

        u32::try_from(rounded.max(0)).unwrap_or(u32::MAX)
    }

    /// Format the way the storefront shows prices: thousands grouped by
    /// spaces and a decimal comma when there are cents ("1 800", "849,15").
    pub fn display(&self) -> String {
        let cents = self.0.unsigned_abs();
        let units = (cents / CENTS_PER_UNIT.unsigned_abs()).to_string();
        let fraction = cents % CENTS_PER_UNIT.unsigned_abs();
        let mut grouped = String::with_capacity(units.len() + units.len() / 3 + 4);

        if self.is_negative() {
            grouped.push('-');
        }

        for (i, c) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }

        if fraction != 0 {
            grouped.push_str(&format!(",{fraction:02}"));
        }

        grouped
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % CENTS_PER_UNIT == 0 {
            serializer.serialize_i64(self.0 / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a price as a JSON number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money::new(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money::new(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if v.is_finite() {
            Ok(Money::from_decimal(v))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);

        assert_eq!(a + b, Money::new(1300));
        assert_eq!(a - b, Money::new(700));
        assert_eq!(b * 3, Money::new(900));
    }

    #[test]
    fn test_money_units_and_cents() {
        assert_eq!(Money::new(12).cents(), 1200);
        assert_eq!(Money::from_cents(84915).to_decimal(), 849.15);
        assert_eq!(Money::from_decimal(49.99), Money::from_cents(4999));
        assert_eq!(Money::from_decimal(0.125), Money::from_cents(13));
    }

    #[test]
    fn test_money_saturates() {
        assert_eq!(Money::new(i64::MAX) + Money::new(1), Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MAX).multiply(2), Money::new(i64::MAX));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::new).sum();
        assert_eq!(total, Money::new(600));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Money::new(200).percent_of(Money::new(2000)), 10);
        assert_eq!(Money::new(0).percent_of(Money::new(2000)), 0);
        assert_eq!(Money::new(100).percent_of(Money::zero()), 0);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(Money::new(1).percent_of(Money::new(8)), 13);
        // 1/3 = 33.33%
        assert_eq!(Money::new(1).percent_of(Money::new(3)), 33);
        // 2/3 = 66.67%
        assert_eq!(Money::new(2).percent_of(Money::new(3)), 67);
    }

    #[test]
    fn test_percent_of_uses_cents_exactly() {
        // 149.85 of 999 is exactly 15%.
        let saved = Money::new(999) - Money::from_cents(84915);
        assert_eq!(saved, Money::from_cents(14985));
        assert_eq!(saved.percent_of(Money::new(999)), 15);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(0).display(), "0");
        assert_eq!(Money::new(999).display(), "999");
        assert_eq!(Money::new(1800).display(), "1 800");
        assert_eq!(Money::new(1234567).display(), "1 234 567");
        assert_eq!(Money::new(-25000).to_string(), "-25 000");
        assert_eq!(Money::from_cents(84915).display(), "849,15");
        assert_eq!(Money::from_cents(123405).display(), "1 234,05");
    }

    #[test]
    fn test_money_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(800)).unwrap(), "800");
        assert_eq!(
            serde_json::to_string(&Money::from_cents(84915)).unwrap(),
            "849.15"
        );

        let m: Money = serde_json::from_str("1000").unwrap();
        assert_eq!(m, Money::new(1000));
    }

    #[test]
    fn test_money_parses_fractional_numbers() {
        let whole: Money = serde_json::from_str("1000.0").unwrap();
        assert_eq!(whole, Money::new(1000));

        let fractional: Money = serde_json::from_str("849.15").unwrap();
        assert_eq!(fractional, Money::from_cents(84915));

        let negative: Money = serde_json::from_str("-2.5").unwrap();
        assert_eq!(negative, Money::from_cents(-250));

        assert!(serde_json::from_str::<Money>(r#""1000""#).is_err());
    }
}
