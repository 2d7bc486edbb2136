use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Missing '=' between the two sides")]
    MissingRelation,
    #[error("Integer literal out of range: {0}")]
    IntegerOverflow(String),
}
