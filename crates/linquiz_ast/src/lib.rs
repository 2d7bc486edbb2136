//! Data model for linear equation drills: exact rationals, degree-one
//! expressions in `x`, and equations built from two of them.

pub mod equation;
pub mod linear;
pub mod rational;

pub use equation::Equation;
pub use linear::{format_term, LinearExpr, VAR};
pub use rational::{Rational, RationalParseError};
