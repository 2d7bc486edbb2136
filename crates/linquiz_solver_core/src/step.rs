use serde::{Deserialize, Serialize};
use std::fmt;

/// Which transformation a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Original,
    CollectVariable,
    CollectConstants,
    Divide,
    Solution,
    Identity,
    Contradiction,
}

impl StepKind {
    /// Steps that end a trace.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StepKind::Solution | StepKind::Identity | StepKind::Contradiction
        )
    }
}

/// One entry of a solution trace: prose plus the exact equation it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStep {
    pub kind: StepKind,
    pub description: String,
    /// Equation after this step as plain text.
    pub equation: String,
    /// Same equation as LaTeX.
    pub latex: String,
}

impl SolveStep {
    pub fn new(
        kind: StepKind,
        description: impl Into<String>,
        equation: impl Into<String>,
        latex: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            equation: equation.into(),
            latex: latex.into(),
        }
    }
}

impl fmt::Display for SolveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.equation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_description_and_equation() {
        let step = SolveStep::new(StepKind::Solution, "Solution", "x = 7/3", "x = \\frac{7}{3}");
        assert_eq!(step.to_string(), "Solution: x = 7/3");
    }

    #[test]
    fn terminal_kinds() {
        assert!(StepKind::Solution.is_terminal());
        assert!(StepKind::Contradiction.is_terminal());
        assert!(!StepKind::Divide.is_terminal());
    }
}
