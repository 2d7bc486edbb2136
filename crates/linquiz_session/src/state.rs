use linquiz_solver_core::{solve_steps, LinearError, Problem, ProblemGenerator, SolveStep};
use rand::Rng;
use tracing::{debug, info};

use crate::verification::{verify_final_step, Verdict};

/// Name used when the student has not introduced themselves.
pub const DEFAULT_NAME: &str = "Explorer";

/// Per-session state owned by the host (CLI/Web).
///
/// Created on first interaction, reset on every new problem and dropped when
/// the session ends. The solver core stays stateless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub student_name: Option<String>,
    pub problem: Option<Problem>,
    /// Cached trace for `problem`, computed on first reveal.
    pub steps: Option<Vec<SolveStep>>,
    pub solution_visible: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a trimmed name. Returns false (and keeps the old name) if empty.
    pub fn set_student_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        info!(name, "student introduced");
        self.student_name = Some(name.to_string());
        true
    }

    pub fn display_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Replace the current problem; the trace is dropped and hidden.
    pub fn new_problem<R: Rng>(
        &mut self,
        generator: &mut ProblemGenerator<R>,
    ) -> Result<&Problem, LinearError> {
        let problem = generator.generate()?;
        debug!(equation = %problem.equation, "new problem");
        self.steps = None;
        self.solution_visible = false;
        let problem: &Problem = self.problem.insert(problem);
        Ok(problem)
    }

    /// Show the solution, solving on first use. `None` if there is no problem.
    pub fn reveal(&mut self) -> Result<Option<&[SolveStep]>, LinearError> {
        let Some(problem) = self.problem else {
            return Ok(None);
        };
        if self.steps.is_none() {
            self.steps = Some(solve_steps(&problem.equation)?);
        }
        self.solution_visible = true;
        Ok(self.steps.as_deref())
    }

    pub fn hide(&mut self) {
        self.solution_visible = false;
    }

    /// Visible steps, if the solution is currently revealed.
    pub fn visible_steps(&self) -> Option<&[SolveStep]> {
        if self.solution_visible {
            self.steps.as_deref()
        } else {
            None
        }
    }

    /// Verdict for the revealed trace against the stored solution.
    pub fn verdict(&self) -> Option<Verdict> {
        let problem = self.problem.as_ref()?;
        let steps = self.visible_steps()?;
        Some(verify_final_step(steps, problem.solution))
    }

    /// End the session: forget the student and the problem.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
