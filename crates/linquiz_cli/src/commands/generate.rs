//! generate subcommand handler.

use anyhow::Result;
use clap::Args;
use linquiz_solver_core::{GeneratorConfig, ProblemGenerator};
use std::process::ExitCode;

use crate::json_types::{print_pretty_json, ErrorJsonOutput, GenerateJsonOutput, ProblemJson};

/// Arguments for generate subcommand
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed for reproducible problems
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of problems to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Print the intended solution next to each equation
    #[arg(long, default_value_t = false)]
    pub show_answer: bool,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: GenerateArgs, config: GeneratorConfig) -> Result<ExitCode> {
    let generator = match args.seed {
        Some(seed) => ProblemGenerator::seeded(seed, config),
        None => ProblemGenerator::from_entropy(config),
    };

    let problems = match generator.take(args.count).collect::<Result<Vec<_>, _>>() {
        Ok(problems) => problems,
        Err(e) if args.json => {
            print_pretty_json(&ErrorJsonOutput::new(e.to_string()))?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        let output = GenerateJsonOutput {
            ok: true,
            seed: args.seed,
            problems: problems
                .iter()
                .map(|p| ProblemJson::from_problem(p, args.show_answer))
                .collect(),
        };
        print_pretty_json(&output)?;
    } else {
        for problem in &problems {
            if args.show_answer {
                println!("{}    (x = {})", problem.equation, problem.solution);
            } else {
                println!("{}", problem.equation);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
