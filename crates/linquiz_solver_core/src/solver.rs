//! Step-by-step solver for `a*x + b = c*x + d`.
//!
//! The trace opens with the original equation, then applies three phases in
//! order. Each phase emits a step only when it changes the equation:
//!
//! 1. collect x-terms on the left (`a' = a - c`), skipped when `c == 0`;
//! 2. collect constants on the right (`d' = d - b`), skipped when `b == 0`;
//! 3. isolate x: identity, contradiction, `x = d'` when `a' == 1`, or a
//!    division step followed by the exact quotient `x = d'/a'`.

use crate::error::LinearError;
use crate::linear_didactic as didactic;
use crate::solve_outcome::{LinearSolution, SolveOutcome};
use crate::step::{SolveStep, StepKind};
use linquiz_ast::{Equation, LinearExpr, Rational};
use tracing::debug;

fn equation_step(kind: StepKind, description: String, equation: Equation) -> SolveStep {
    SolveStep::new(kind, description, equation.to_string(), equation.to_latex())
}

fn solution_step(value: &Rational) -> SolveStep {
    SolveStep::new(
        StepKind::Solution,
        didactic::solution_message(),
        didactic::solution_equation_text(value),
        didactic::solution_equation_latex(value),
    )
}

/// Solve `equation`, returning the trace and the typed outcome.
pub fn solve_linear(equation: &Equation) -> Result<LinearSolution, LinearError> {
    let (a, b, c, d) = equation.coefficients();
    if [a, b, c, d].contains(&i64::MIN) {
        return Err(LinearError::overflow("coefficient"));
    }
    debug!(a, b, c, d, "solving linear equation");

    let mut steps = vec![equation_step(
        StepKind::Original,
        didactic::original_message(),
        *equation,
    )];

    // Phase 1: (a - c)x + b = d
    let coef = a
        .checked_sub(c)
        .ok_or_else(|| LinearError::overflow("x-coefficient"))?;
    if c != 0 {
        debug!(rhs_coef = c, coef, "collecting x-terms on the left");
        steps.push(equation_step(
            StepKind::CollectVariable,
            didactic::collect_variable_message(c),
            Equation::from_sides(LinearExpr::new(coef, b), LinearExpr::constant(d)),
        ));
    }

    // Phase 2: (a - c)x = d - b
    let rhs = d
        .checked_sub(b)
        .ok_or_else(|| LinearError::overflow("constant term"))?;
    if b != 0 {
        debug!(lhs_constant = b, rhs, "collecting constants on the right");
        steps.push(equation_step(
            StepKind::CollectConstants,
            didactic::collect_constants_message(b),
            Equation::from_sides(LinearExpr::term(coef), LinearExpr::constant(rhs)),
        ));
    }

    // Phase 3: isolate x
    let outcome = match (coef, rhs) {
        (0, 0) => {
            steps.push(equation_step(
                StepKind::Identity,
                didactic::identity_message(),
                Equation::new(0, 0, 0, 0),
            ));
            SolveOutcome::AllReals
        }
        (0, rhs) => {
            steps.push(equation_step(
                StepKind::Contradiction,
                didactic::contradiction_message(),
                Equation::new(0, 0, 0, rhs),
            ));
            SolveOutcome::Empty
        }
        (1, rhs) => {
            let value = Rational::from_integer(rhs);
            steps.push(solution_step(&value));
            SolveOutcome::Unique(value)
        }
        (coef, rhs) => {
            let value =
                Rational::new(rhs, coef).ok_or_else(|| LinearError::overflow("quotient"))?;
            steps.push(SolveStep::new(
                StepKind::Divide,
                didactic::divide_message(coef),
                didactic::divide_equation_text(coef, rhs),
                didactic::divide_equation_latex(coef, rhs),
            ));
            steps.push(solution_step(&value));
            SolveOutcome::Unique(value)
        }
    };
    debug!(%outcome, steps = steps.len(), "linear solve finished");

    Ok(LinearSolution { steps, outcome })
}

/// Ordered, human-readable derivation for `equation`.
pub fn solve_steps(equation: &Equation) -> Result<Vec<SolveStep>, LinearError> {
    solve_linear(equation).map(|solution| solution.steps)
}
