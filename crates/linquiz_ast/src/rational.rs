//! Exact rational numbers.
//!
//! Every coefficient and every displayed solution goes through this type, so
//! results never pass through floating point.

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// A rational number in lowest terms with a positive denominator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(Rational64);

impl Rational {
    /// Creates `numer / denom`, reduced.
    ///
    /// Returns `None` for a zero denominator, and for `i64::MIN` operands whose
    /// sign normalisation cannot be represented.
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 || numer == i64::MIN || denom == i64::MIN {
            return None;
        }
        Some(Self(Rational64::new(numer, denom)))
    }

    pub fn from_integer(n: i64) -> Self {
        Self(Rational64::from_integer(n))
    }

    pub fn zero() -> Self {
        Self(Rational64::zero())
    }

    pub fn one() -> Self {
        Self(Rational64::one())
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Converts to an integer if the denominator is 1.
    pub fn to_integer(&self) -> Option<i64> {
        self.is_integer().then(|| self.numer())
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(&other.0).map(Self)
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(&other.0).map(Self)
    }

    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(&other.0).map(Self)
    }

    /// Returns `None` on overflow or when `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        self.0.checked_div(&other.0).map(Self)
    }

    /// Multiplies by an integer, checking for overflow.
    pub fn mul_int(&self, k: i64) -> Option<Self> {
        self.checked_mul(&Self::from_integer(k))
    }

    /// LaTeX form: `\frac{7}{3}`, with the sign kept outside the fraction.
    pub fn to_latex(&self) -> String {
        if self.is_integer() {
            return self.numer().to_string();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}\\frac{{{}}}{{{}}}",
            sign,
            self.numer().unsigned_abs(),
            self.denom()
        )
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalParseError {
    #[error("empty rational literal")]
    Empty,
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
    #[error("zero denominator")]
    ZeroDenominator,
}

impl FromStr for Rational {
    type Err = RationalParseError;

    /// Accepts `4`, `-4`, `7/3` and `- 7 / 3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(RationalParseError::Empty);
        }

        let parse_int = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| RationalParseError::InvalidInteger(part.to_string()))
        };

        match compact.split_once('/') {
            Some((numer, denom)) => {
                let numer = parse_int(numer)?;
                let denom = parse_int(denom)?;
                if denom == 0 {
                    return Err(RationalParseError::ZeroDenominator);
                }
                Self::new(numer, denom)
                    .ok_or_else(|| RationalParseError::InvalidInteger(s.trim().to_string()))
            }
            None => Ok(Self::from_integer(parse_int(&compact)?)),
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
