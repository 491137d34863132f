use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sqlx::Type;
use thiserror::Error;

use crate::op;

//--------------------------------------       Money       -----------------------------------------------------------
/// A monetary amount with 2-decimal currency precision, stored as a whole number of cents.
///
/// Amounts may be negative: `total - amount_paid` is allowed to go below zero to represent an
/// overpayment, and callers surface that value as-is.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd)]
#[sqlx(transparent)]
pub struct Money(i64);

op!(binary Money, Add, add);
op!(binary Money, Sub, sub);
op!(inplace Money, SubAssign, sub_assign);
op!(unary Money, Neg, neg);

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a monetary amount: {0}")]
pub struct MoneyConversionError(String);

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    /// The amount as a whole number of cents.
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn from_whole(units: i64) -> Self {
        Self(units * 100)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses an operator-entered amount, coercing anything unparsable to zero.
    ///
    /// Fractional cents are rounded half-away-from-zero to 2 decimal places. Non-finite values
    /// (NaN, infinities) coerce to zero like any other garbage input. Callers that need a hard
    /// failure on bad input should use [`FromStr`] instead.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse::<Money>().unwrap_or_default()
    }

    fn try_from_f64(value: f64) -> Result<Self, MoneyConversionError> {
        if !value.is_finite() {
            return Err(MoneyConversionError(format!("{value} is not a finite number")));
        }
        #[allow(clippy::cast_possible_truncation)]
        let cents = (value * 100.0).round() as i64;
        Ok(Self(cents))
    }
}

impl FromStr for Money {
    type Err = MoneyConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f64>().map_err(|e| MoneyConversionError(format!("{s}: {e}")))?;
        Money::try_from_f64(value)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

// Serialized as a 2-decimal string ("45.50"), the shape the order forms and the database layer of
// the original system exchange. Deserialization also accepts plain JSON numbers.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        struct MoneyVisitor;

        impl de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a decimal amount as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                v.parse().map_err(de::Error::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Money::try_from_f64(v).map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money::from_whole(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v).map(Money::from_whole).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_renders_two_decimals() {
        assert_eq!(Money::from_cents(12345).to_string(), "123.45");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(-2500).to_string(), "-25.00");
    }

    #[test]
    fn strict_parse() {
        assert_eq!("100.00".parse::<Money>().unwrap(), Money::from_cents(10_000));
        assert_eq!("45.5".parse::<Money>().unwrap(), Money::from_cents(4550));
        assert_eq!(" 12 ".parse::<Money>().unwrap(), Money::from_cents(1200));
        assert!("abc".parse::<Money>().is_err());
        assert!("NaN".parse::<Money>().is_err());
        assert!("inf".parse::<Money>().is_err());
    }

    #[test]
    fn lenient_parse_coerces_garbage_to_zero() {
        assert_eq!(Money::parse_lenient("abc"), Money::ZERO);
        assert_eq!(Money::parse_lenient(""), Money::ZERO);
        assert_eq!(Money::parse_lenient("12,50"), Money::ZERO);
        assert_eq!(Money::parse_lenient("75.00"), Money::from_cents(7500));
        assert_eq!(Money::parse_lenient("-5"), Money::from_cents(-500));
    }

    #[test]
    fn fractional_cents_round_half_away_from_zero() {
        assert_eq!(Money::parse_lenient("0.005"), Money::from_cents(1));
        assert_eq!(Money::parse_lenient("1.004"), Money::from_cents(100));
        assert_eq!(Money::parse_lenient("-0.005"), Money::from_cents(-1));
    }

    #[test]
    fn arithmetic() {
        let total = Money::from_cents(10_000);
        let paid = Money::from_cents(4550);
        assert_eq!(total - paid, Money::from_cents(5450));
        assert_eq!(paid - total, Money::from_cents(-5450));
        assert_eq!(-paid, Money::from_cents(-4550));
        assert_eq!(Money::from_cents(250) * 4, Money::from_cents(1000));
        let sum: Money = [total, paid].into_iter().sum();
        assert_eq!(sum, Money::from_cents(14_550));
    }

    #[test]
    fn serde_round_trip() {
        let m = Money::from_cents(5450);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#""54.50""#);
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), m);
        assert_eq!(serde_json::from_str::<Money>("54.5").unwrap(), m);
        assert_eq!(serde_json::from_str::<Money>("54").unwrap(), Money::from_cents(5400));
    }
}
