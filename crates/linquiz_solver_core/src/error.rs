use linquiz_parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearError {
    /// Coefficient sampling could not satisfy its constraints.
    #[error("Invalid generation constraint: {reason} (after {attempts} attempts)")]
    InvalidGenerationConstraint { reason: String, attempts: usize },
    #[error("Unsupported equation form: {0}")]
    UnsupportedEquationForm(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LinearError {
    pub(crate) fn overflow(what: &str) -> Self {
        LinearError::UnsupportedEquationForm(format!("{} is out of range", what))
    }
}
