use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

mod commands;
mod config;
mod format;
mod json_types;
mod repl;

use commands::config::ConfigArgs;
use commands::generate::GenerateArgs;
use commands::solve::SolveArgs;
use config::{LinquizConfig, CONFIG_FILE};
use repl::QuizArgs;

/// Practice solving linear equations of the form ax + b = cx + d.
#[derive(Parser, Debug)]
#[command(name = "linquiz", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random equations with integer solutions
    Generate(GenerateArgs),
    /// Solve an equation step by step
    Solve(SolveArgs),
    /// Interactive practice session
    Quiz(QuizArgs),
    /// Show or reset the configuration file
    Config(ConfigArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Generate(args) => {
            let config = LinquizConfig::load(&cli.config);
            commands::generate::run(args, config.generator)
        }
        Command::Solve(args) => commands::solve::run(args),
        Command::Quiz(args) => {
            let config = LinquizConfig::load(&cli.config);
            repl::run(args, config.generator)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config(args) => commands::config::run(args, &cli.config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
