//! Random equation generator.
//!
//! Picks the solution first, then the coefficients, and derives the last
//! constant so that `a*x_sol + b = c*x_sol + d` holds exactly.

use crate::error::LinearError;
use crate::generation_budget::GenerationBudget;
use linquiz_ast::Equation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Inclusive integer range, written as `[min, max]` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<[i64; 2]> for IntRange {
    fn from([min, max]: [i64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<IntRange> for [i64; 2] {
    fn from(range: IntRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Range for the target solution `x_sol`.
    pub solution_range: IntRange,
    /// Range for the leading coefficients `a` and `c` (zero is always rejected).
    pub coefficient_range: IntRange,
    /// Range for the LHS constant `b`.
    pub constant_range: IntRange,
    /// Draws allowed per constrained coefficient.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            solution_range: IntRange::new(-10, 10),
            coefficient_range: IntRange::new(-10, 10),
            constant_range: IntRange::new(-20, 20),
            max_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    /// Reject inverted ranges before any sampling happens.
    pub fn validate(&self) -> Result<(), LinearError> {
        let ranges = [
            ("solution_range", self.solution_range),
            ("coefficient_range", self.coefficient_range),
            ("constant_range", self.constant_range),
        ];
        for (name, range) in ranges {
            if range.min > range.max {
                return Err(LinearError::InvalidGenerationConstraint {
                    reason: format!("{} {} is empty", name, range),
                    attempts: 0,
                });
            }
        }
        Ok(())
    }
}

/// A generated equation together with the integer it was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub equation: Equation,
    pub solution: i64,
}

impl Problem {
    pub fn into_parts(self) -> (Equation, i64) {
        (self.equation, self.solution)
    }
}

/// Equation generator owning its random source.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R = ChaCha8Rng> {
    rng: R,
    config: GeneratorConfig,
}

impl ProblemGenerator<ChaCha8Rng> {
    /// Reproducible generator: the same seed yields the same problems.
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), config)
    }

    pub fn from_entropy(config: GeneratorConfig) -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy(), config)
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn sample(&mut self, range: IntRange) -> i64 {
        self.rng.gen_range(range.min..=range.max)
    }

    fn pick_coefficient<F>(&mut self, constraint: &str, accept: F) -> Result<i64, LinearError>
    where
        F: Fn(i64) -> bool,
    {
        let mut budget = GenerationBudget::new(self.config.max_attempts);
        while budget.try_consume() {
            let candidate = self.sample(self.config.coefficient_range);
            if accept(candidate) {
                return Ok(candidate);
            }
        }

        error!(
            constraint,
            attempts = budget.used(),
            range = %self.config.coefficient_range,
            "coefficient sampling exhausted its budget"
        );
        Err(LinearError::InvalidGenerationConstraint {
            reason: format!(
                "no {} found in {}",
                constraint, self.config.coefficient_range
            ),
            attempts: budget.used(),
        })
    }

    /// Produce one problem whose equation is satisfied by its solution.
    pub fn generate(&mut self) -> Result<Problem, LinearError> {
        self.config.validate()?;

        let solution = self.sample(self.config.solution_range);
        let a = self.pick_coefficient("nonzero coefficient a", |a| a != 0)?;
        let c = self.pick_coefficient("nonzero coefficient c distinct from a", |c| {
            c != 0 && c != a
        })?;
        let b = self.sample(self.config.constant_range);

        // d = b + (a - c) * x_sol
        let d = a
            .checked_sub(c)
            .and_then(|diff| diff.checked_mul(solution))
            .and_then(|shift| shift.checked_add(b))
            .ok_or_else(|| {
                error!(a, b, c, solution, "derived constant overflows");
                LinearError::InvalidGenerationConstraint {
                    reason: "derived constant d is out of range".to_string(),
                    attempts: 0,
                }
            })?;

        let equation = Equation::new(a, b, c, d);
        debug!(%equation, solution, "generated problem");
        Ok(Problem { equation, solution })
    }
}

impl<R: Rng> Iterator for ProblemGenerator<R> {
    type Item = Result<Problem, LinearError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Generate one problem with the default ranges and a thread-local RNG.
pub fn generate_problem() -> Result<Problem, LinearError> {
    ProblemGenerator::with_rng(rand::thread_rng(), GeneratorConfig::default()).generate()
}
