//! Core of the linear equation drill: a generator of solvable
//! `ax + b = cx + d` problems and a step-by-step solver that explains them.

pub mod error;
pub mod generation_budget;
pub mod generator;
pub mod linear_didactic;
pub mod linear_form;
pub mod solve_outcome;
pub mod solver;
pub mod step;

pub use error::LinearError;
pub use generation_budget::GenerationBudget;
pub use generator::{generate_problem, GeneratorConfig, IntRange, Problem, ProblemGenerator};
pub use linear_form::{linear_form, parse_linear_equation};
pub use solve_outcome::{LinearSolution, SolveOutcome};
pub use solver::{solve_linear, solve_steps};
pub use step::{SolveStep, StepKind};
