//! JSON output types for the non-interactive subcommands.

use linquiz_ast::Equation;
use linquiz_solver_core::{Problem, SolveOutcome, SolveStep, StepKind};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ProblemJson {
    pub equation: String,
    pub latex: String,
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<i64>,
}

impl ProblemJson {
    pub fn from_problem(problem: &Problem, show_answer: bool) -> Self {
        let (a, b, c, d) = problem.equation.coefficients();
        Self {
            equation: problem.equation.to_string(),
            latex: problem.equation.to_latex(),
            a,
            b,
            c,
            d,
            solution: show_answer.then_some(problem.solution),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GenerateJsonOutput {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub problems: Vec<ProblemJson>,
}

/// A solver step for equation-solving JSON output.
#[derive(Serialize, Debug)]
pub struct SolveStepJson {
    /// Step index (1-based)
    pub index: usize,
    pub kind: StepKind,
    pub description: String,
    pub equation: String,
    pub latex: String,
}

impl SolveStepJson {
    pub fn from_steps(steps: &[SolveStep]) -> Vec<Self> {
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| Self {
                index: i + 1,
                kind: step.kind,
                description: step.description.clone(),
                equation: step.equation.clone(),
                latex: step.latex.clone(),
            })
            .collect()
    }
}

#[derive(Serialize, Debug)]
pub struct SolveJsonOutput {
    pub ok: bool,
    pub input: String,
    pub equation: Equation,
    pub steps: Vec<SolveStepJson>,
    pub outcome: SolveOutcome,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: None,
        }
    }

    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: Some(input.into()),
        }
    }
}

pub fn print_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
