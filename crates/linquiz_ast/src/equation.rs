use crate::linear::LinearExpr;
use crate::rational::Rational;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A linear equation `lhs = rhs`, read as `a*x + b = c*x + d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equation {
    pub lhs: LinearExpr,
    pub rhs: LinearExpr,
}

impl Equation {
    /// Builds `a*x + b = c*x + d`.
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self {
            lhs: LinearExpr::new(a, b),
            rhs: LinearExpr::new(c, d),
        }
    }

    pub fn from_sides(lhs: LinearExpr, rhs: LinearExpr) -> Self {
        Self { lhs, rhs }
    }

    /// Coefficients as `(a, b, c, d)`.
    pub fn coefficients(&self) -> (i64, i64, i64, i64) {
        (self.lhs.coef, self.lhs.constant, self.rhs.coef, self.rhs.constant)
    }

    /// True when both sides agree at `x`. Overflow counts as not satisfied.
    pub fn is_satisfied_by(&self, x: i64) -> bool {
        match (self.lhs.evaluate(x), self.rhs.evaluate(x)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }

    pub fn is_satisfied_by_rational(&self, x: Rational) -> bool {
        match (self.lhs.evaluate_rational(x), self.rhs.evaluate_rational(x)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }

    pub fn to_latex(&self) -> String {
        format!("{} = {}", self.lhs.to_latex(), self.rhs.to_latex())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_both_sides() {
        let eq = Equation::new(3, 1, 0, 8);
        assert_eq!(eq.to_string(), "3x + 1 = 8");
        assert_eq!(Equation::new(-2, 0, 5, -3).to_string(), "-2x = 5x - 3");
    }

    #[test]
    fn substitution_checks_both_sides() {
        // 2x + 3 = -x + 9 holds at x = 2
        let eq = Equation::new(2, 3, -1, 9);
        assert!(eq.is_satisfied_by(2));
        assert!(!eq.is_satisfied_by(3));
    }

    #[test]
    fn rational_substitution() {
        let eq = Equation::new(3, 1, 0, 8);
        assert!(eq.is_satisfied_by_rational(Rational::new(7, 3).unwrap()));
        assert!(!eq.is_satisfied_by_rational(Rational::from_integer(2)));
    }

    #[test]
    fn json_shape_is_stable() {
        let eq = Equation::new(1, 5, 0, 5);
        let json = serde_json::to_value(eq).unwrap();
        assert_eq!(json["lhs"]["coef"], 1);
        assert_eq!(json["rhs"]["constant"], 5);
    }
}
