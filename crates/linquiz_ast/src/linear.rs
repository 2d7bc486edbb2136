//! Degree-one polynomials in the single unknown `x`.

use crate::rational::Rational;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the unknown in every equation.
pub const VAR: &str = "x";

/// `coef * x + constant` with exact integer coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LinearExpr {
    pub coef: i64,
    pub constant: i64,
}

impl LinearExpr {
    pub fn new(coef: i64, constant: i64) -> Self {
        Self { coef, constant }
    }

    /// A constant expression (`coef == 0`).
    pub fn constant(constant: i64) -> Self {
        Self { coef: 0, constant }
    }

    /// A bare x-term (`constant == 0`).
    pub fn term(coef: i64) -> Self {
        Self { coef, constant: 0 }
    }

    pub fn is_constant(&self) -> bool {
        self.coef == 0
    }

    /// Value at `x`, or `None` on overflow.
    pub fn evaluate(&self, x: i64) -> Option<i64> {
        self.coef.checked_mul(x)?.checked_add(self.constant)
    }

    pub fn evaluate_rational(&self, x: Rational) -> Option<Rational> {
        Rational::from_integer(self.coef)
            .checked_mul(&x)?
            .checked_add(&Rational::from_integer(self.constant))
    }

    /// LaTeX form. Integer linear terms need no markup beyond the plain form.
    pub fn to_latex(&self) -> String {
        self.to_string()
    }
}

/// Renders `k` as the coefficient of `x`: `x`, `-x`, `3x`.
pub fn format_term(coef: i64) -> String {
    match coef {
        1 => VAR.to_string(),
        -1 => format!("-{}", VAR),
        k => format!("{}{}", k, VAR),
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coef == 0 {
            return write!(f, "{}", self.constant);
        }
        write!(f, "{}", format_term(self.coef))?;
        match self.constant {
            0 => Ok(()),
            k if k > 0 => write!(f, " + {}", k),
            k => write!(f, " - {}", k.unsigned_abs()),
        }
    }
}
