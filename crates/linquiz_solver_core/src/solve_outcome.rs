use crate::step::SolveStep;
use linquiz_ast::{Rational, VAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Solution set of a linear equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Exactly one solution.
    Unique(Rational),
    /// Identity: every value of x satisfies the equation.
    AllReals,
    /// Contradiction: no value of x satisfies the equation.
    Empty,
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<Rational> {
        match self {
            SolveOutcome::Unique(value) => Some(*value),
            SolveOutcome::AllReals | SolveOutcome::Empty => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !matches!(self, SolveOutcome::Unique(_))
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Unique(value) => write!(f, "{} = {}", VAR, value),
            SolveOutcome::AllReals => write!(f, "infinitely many solutions"),
            SolveOutcome::Empty => write!(f, "no solutions"),
        }
    }
}

/// Full result of a solve: the ordered trace and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearSolution {
    pub steps: Vec<SolveStep>,
    pub outcome: SolveOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_host_keywords() {
        let unique = SolveOutcome::Unique(Rational::new(7, 3).unwrap());
        assert_eq!(unique.to_string(), "x = 7/3");
        assert_eq!(SolveOutcome::AllReals.to_string(), "infinitely many solutions");
        assert_eq!(SolveOutcome::Empty.to_string(), "no solutions");
    }

    #[test]
    fn solution_only_for_unique() {
        assert_eq!(
            SolveOutcome::Unique(Rational::from_integer(2)).solution(),
            Some(Rational::from_integer(2))
        );
        assert_eq!(SolveOutcome::AllReals.solution(), None);
        assert!(SolveOutcome::Empty.is_degenerate());
    }
}
