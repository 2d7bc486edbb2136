//! Host-side check of a solution trace against the generator's answer.
//!
//! Works on the rendered text of the last step, the same way a display shell
//! would, so it also catches formatting regressions in the solver output.

use linquiz_ast::{Rational, VAR};
use linquiz_solver_core::SolveStep;
use serde::Serialize;
use tracing::debug;

const INFINITE_KEYWORD: &str = "infinitely many solutions";
const EMPTY_KEYWORD: &str = "no solutions";

/// Outcome of comparing the final step with the expected solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The trace ends in `x = expected`.
    Correct { value: Rational },
    /// The trace ends in a different value.
    Mismatch { found: Rational, expected: i64 },
    /// The trace ends in an identity or contradiction.
    SpecialCase { summary: String },
    /// The last step could not be read. Never fatal.
    Unverifiable { reason: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    /// Message shown to the student after the steps.
    pub fn message(&self, name: &str, expected: i64) -> String {
        let success = format!("Mission accomplished, {}!", name);
        match self {
            Verdict::Correct { value } => format!(
                "{} The steps led to the correct solution: {} = {}",
                success, VAR, value
            ),
            Verdict::Mismatch { found, expected } => format!(
                "Hmm, {}. The steps led to {} = {}, but the expected answer was {} = {}. Let's recheck the steps!",
                name, VAR, found, VAR, expected
            ),
            Verdict::SpecialCase { summary } => format!(
                "{} The equation resulted in a special case: {}",
                success, summary
            ),
            Verdict::Unverifiable { reason } => format!(
                "{} The expected answer was {} = {}. {}",
                success, VAR, expected, reason
            ),
        }
    }
}

fn solution_prefix() -> String {
    format!("{} =", VAR)
}

/// Compare the last step of `steps` with `expected`.
pub fn verify_final_step(steps: &[SolveStep], expected: i64) -> Verdict {
    let Some(last) = steps.last() else {
        return Verdict::Unverifiable {
            reason: "No solution steps found to verify.".to_string(),
        };
    };
    let text = last.to_string();

    if text.contains(INFINITE_KEYWORD) || text.contains(EMPTY_KEYWORD) {
        let summary = text
            .rsplit(':')
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let summary = if text.contains(INFINITE_KEYWORD) {
            format!("{} ({})", INFINITE_KEYWORD, summary)
        } else {
            format!("{} ({})", EMPTY_KEYWORD, summary)
        };
        return Verdict::SpecialCase { summary };
    }

    if !last.equation.trim_start().starts_with(&solution_prefix()) {
        return Verdict::Unverifiable {
            reason: "The final step format was not recognized for automatic check.".to_string(),
        };
    }

    let rhs = last.equation.rsplit('=').next().unwrap_or_default();
    match rhs.parse::<Rational>() {
        Ok(found) if found == Rational::from_integer(expected) => {
            Verdict::Correct { value: found }
        }
        Ok(found) => Verdict::Mismatch { found, expected },
        Err(e) => {
            debug!(error = %e, rhs, "could not parse final solution");
            Verdict::Unverifiable {
                reason: "Could not parse the final solution from steps for automatic check."
                    .to_string(),
            }
        }
    }
}
