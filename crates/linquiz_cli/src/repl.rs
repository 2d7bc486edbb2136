//! Interactive quiz loop.
//!
//! `QuizCore` holds the session and turns commands into reply lines;
//! `run` only deals with the terminal.

use clap::Args;
use linquiz_session::SessionState;
use linquiz_solver_core::{GeneratorConfig, LinearError, ProblemGenerator};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::str::FromStr;

use crate::format::format_steps;

/// Arguments for quiz subcommand
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Seed for a reproducible sequence of problems
    #[arg(long)]
    pub seed: Option<u64>,

    /// Student name (asked interactively when omitted)
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    New,
    Show,
    Hide,
    Name(String),
    Help,
    Quit,
}

impl FromStr for QuizCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        match head {
            "new" | "n" => Ok(QuizCommand::New),
            "show" | "s" => Ok(QuizCommand::Show),
            "hide" | "h" => Ok(QuizCommand::Hide),
            "name" if !rest.trim().is_empty() => Ok(QuizCommand::Name(rest.trim().to_string())),
            "name" => Err("Usage: name <NAME>".to_string()),
            "help" | "?" => Ok(QuizCommand::Help),
            "quit" | "exit" | "q" => Ok(QuizCommand::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
        }
    }
}

pub const HELP: &str = "\
Commands:
  new          generate a new equation
  show         reveal the step-by-step solution
  hide         hide the solution
  name <NAME>  change your name
  help         show this help
  quit         leave the quiz";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub struct QuizCore {
    pub state: SessionState,
    generator: ProblemGenerator,
}

impl QuizCore {
    pub fn new(seed: Option<u64>, config: GeneratorConfig) -> Self {
        let generator = match seed {
            Some(seed) => ProblemGenerator::seeded(seed, config),
            None => ProblemGenerator::from_entropy(config),
        };
        Self {
            state: SessionState::new(),
            generator,
        }
    }

    pub fn greeting(&self) -> String {
        format!(
            "Hello, {}! Type 'new' for an equation like ax + b = cx + d, 'help' for commands.",
            self.state.display_name()
        )
    }

    pub fn handle(&mut self, command: QuizCommand) -> Result<Reply, LinearError> {
        let reply = match command {
            QuizCommand::New => {
                let problem = self.state.new_problem(&mut self.generator)?;
                Reply::lines(vec![
                    "Your current challenge:".to_string(),
                    format!("    {}", problem.equation),
                ])
            }
            QuizCommand::Show => self.show()?,
            QuizCommand::Hide => {
                self.state.hide();
                Reply::line("Solution hidden.")
            }
            QuizCommand::Name(name) => {
                if self.state.set_student_name(&name) {
                    Reply::line(format!("Nice to meet you, {}!", self.state.display_name()))
                } else {
                    Reply::line("Usage: name <NAME>")
                }
            }
            QuizCommand::Help => Reply::line(HELP),
            QuizCommand::Quit => Reply {
                lines: vec![format!("Goodbye, {}!", self.state.display_name())],
                quit: true,
            },
        };
        Ok(reply)
    }

    fn show(&mut self) -> Result<Reply, LinearError> {
        let Some(steps) = self.state.reveal()? else {
            return Ok(Reply::line("No equation yet. Type 'new' to start."));
        };
        let mut lines = vec!["Solution steps:".to_string()];
        lines.extend(format_steps(steps, false));

        let name = self.state.display_name().to_string();
        if let (Some(verdict), Some(problem)) = (self.state.verdict(), self.state.problem) {
            lines.push(verdict.message(&name, problem.solution));
        }
        Ok(Reply::lines(lines))
    }
}

pub fn run(args: QuizArgs, config: GeneratorConfig) -> rustyline::Result<()> {
    let mut core = QuizCore::new(args.seed, config);
    let mut rl = DefaultEditor::new()?;

    match args.name {
        Some(name) => {
            core.state.set_student_name(&name);
        }
        None => match rl.readline("What's your name? ") {
            Ok(name) => {
                core.state.set_student_name(&name);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        },
    }
    println!("{}", core.greeting());

    loop {
        let line = match rl.readline("quiz> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(line.as_str())?;

        let command = match line.parse::<QuizCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match core.handle(command) {
            Ok(reply) => {
                for line in &reply.lines {
                    println!("{}", line);
                }
                if reply.quit {
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "quiz command failed");
                println!("Error: {}", e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> QuizCore {
        QuizCore::new(Some(5), GeneratorConfig::default())
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("new".parse::<QuizCommand>(), Ok(QuizCommand::New));
        assert_eq!(" s ".parse::<QuizCommand>(), Ok(QuizCommand::Show));
        assert_eq!(
            "name  Lerato ".parse::<QuizCommand>(),
            Ok(QuizCommand::Name("Lerato".to_string()))
        );
        assert!("name".parse::<QuizCommand>().is_err());
        assert!("dance".parse::<QuizCommand>().is_err());
    }

    #[test]
    fn show_before_new_asks_for_a_problem() {
        let mut core = core();
        let reply = core.handle(QuizCommand::Show).unwrap();
        assert_eq!(reply.lines, vec!["No equation yet. Type 'new' to start."]);
    }

    #[test]
    fn new_then_show_ends_with_success_message() {
        let mut core = core();
        core.handle(QuizCommand::Name("Ada".to_string())).unwrap();
        let reply = core.handle(QuizCommand::New).unwrap();
        assert_eq!(reply.lines[0], "Your current challenge:");

        let reply = core.handle(QuizCommand::Show).unwrap();
        assert_eq!(reply.lines[0], "Solution steps:");
        assert!(reply.lines[1].starts_with("Step 1: Original equation: "));
        assert!(reply
            .lines
            .last()
            .unwrap()
            .starts_with("Mission accomplished, Ada!"));
    }

    #[test]
    fn hide_clears_visibility() {
        let mut core = core();
        core.handle(QuizCommand::New).unwrap();
        core.handle(QuizCommand::Show).unwrap();
        core.handle(QuizCommand::Hide).unwrap();
        assert!(!core.state.solution_visible);
    }

    #[test]
    fn quit_says_goodbye() {
        let mut core = core();
        let reply = core.handle(QuizCommand::Quit).unwrap();
        assert!(reply.quit);
        assert_eq!(reply.lines, vec!["Goodbye, Explorer!"]);
    }
}
