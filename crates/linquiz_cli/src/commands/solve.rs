//! solve subcommand handler.
//!
//! Parses a single linear equation and prints its step-by-step solution.

use anyhow::Result;
use clap::Args;
use linquiz_solver_core::{parse_linear_equation, solve_linear, LinearError, LinearSolution};
use std::process::ExitCode;

use crate::format::print_steps;
use crate::json_types::{print_pretty_json, ErrorJsonOutput, SolveJsonOutput, SolveStepJson};

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Equation to solve, e.g. "3x + 1 = 2x - 4"
    #[arg(allow_hyphen_values = true)]
    pub equation: String,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show each step as LaTeX
    #[arg(long, default_value_t = false)]
    pub latex: bool,
}

fn solve_input(input: &str) -> Result<(linquiz_ast::Equation, LinearSolution), LinearError> {
    let equation = parse_linear_equation(input)?;
    let solution = solve_linear(&equation)?;
    Ok((equation, solution))
}

pub fn run(args: SolveArgs) -> Result<ExitCode> {
    let (equation, solution) = match solve_input(&args.equation) {
        Ok(solved) => solved,
        Err(e) => {
            tracing::debug!(error = %e, input = %args.equation, "solve failed");
            if args.json {
                print_pretty_json(&ErrorJsonOutput::with_input(e.to_string(), &args.equation))?;
            } else {
                eprintln!("Error: {}", e);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        let output = SolveJsonOutput {
            ok: true,
            input: args.equation,
            equation,
            steps: SolveStepJson::from_steps(&solution.steps),
            outcome: solution.outcome,
        };
        print_pretty_json(&output)?;
    } else {
        println!("Equation: {}", equation);
        print_steps(&solution.steps, args.latex);
    }

    Ok(ExitCode::SUCCESS)
}
