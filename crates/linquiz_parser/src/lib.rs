pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_equation, Monomial, ParsedEquation};
