use crate::error::LinearError;
use linquiz_ast::{Equation, LinearExpr, VAR};
use linquiz_parser::{parse_equation, Monomial};

/// Fold the monomials of one side into `coef * x + constant`.
///
/// Fails with `UnsupportedEquationForm` for powers above one, for any
/// variable other than `x`, and when a running sum overflows.
pub fn linear_form(terms: &[Monomial]) -> Result<LinearExpr, LinearError> {
    let mut expr = LinearExpr::default();

    for term in terms {
        let power = match term.var.as_deref() {
            None => 0,
            Some(var) if var != VAR => {
                return Err(LinearError::UnsupportedEquationForm(format!(
                    "unknown variable '{}', expected '{}'",
                    var, VAR
                )));
            }
            Some(_) => term.power,
        };

        match power {
            0 => {
                expr.constant = expr
                    .constant
                    .checked_add(term.coef)
                    .ok_or_else(|| LinearError::overflow("constant term"))?;
            }
            1 => {
                expr.coef = expr
                    .coef
                    .checked_add(term.coef)
                    .ok_or_else(|| LinearError::overflow("x-coefficient"))?;
            }
            power => {
                return Err(LinearError::UnsupportedEquationForm(format!(
                    "{}^{} is not linear",
                    VAR, power
                )));
            }
        }
    }

    Ok(expr)
}

/// Parse `input` and reduce both sides to linear form.
pub fn parse_linear_equation(input: &str) -> Result<Equation, LinearError> {
    let parsed = parse_equation(input)?;
    Ok(Equation::from_sides(
        linear_form(&parsed.lhs)?,
        linear_form(&parsed.rhs)?,
    ))
}
