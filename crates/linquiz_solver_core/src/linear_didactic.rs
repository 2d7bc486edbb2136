//! Narration for the steps of the linear solver.
//!
//! Kept free of solver state so the wording can be tested on its own and
//! reused by front ends that want to rebuild a trace.

use linquiz_ast::{LinearExpr, Rational, VAR};

/// Verb for removing a signed quantity from one side: a positive amount is
/// subtracted, a negative one is added back.
fn removal_verb(value: i64) -> &'static str {
    if value > 0 {
        "subtracting"
    } else {
        "adding"
    }
}

/// `|k|x` with the unit coefficient elided.
fn magnitude_term(value: i64) -> String {
    match value.unsigned_abs() {
        1 => VAR.to_string(),
        m => format!("{}{}", m, VAR),
    }
}

pub fn original_message() -> String {
    "Original equation".to_string()
}

/// Narration for moving the RHS x-term `c*x` to the left side.
pub fn collect_variable_message(rhs_coef: i64) -> String {
    format!(
        "Move {}-terms to the left side by {} {} {} both sides",
        VAR,
        removal_verb(rhs_coef),
        magnitude_term(rhs_coef),
        if rhs_coef > 0 { "from" } else { "to" }
    )
}

/// Narration for moving the LHS constant `b` to the right side.
pub fn collect_constants_message(lhs_constant: i64) -> String {
    format!(
        "Move constants to the right side by {} {} {} both sides",
        removal_verb(lhs_constant),
        lhs_constant.unsigned_abs(),
        if lhs_constant > 0 { "from" } else { "to" }
    )
}

pub fn divide_message(coef: i64) -> String {
    format!("Isolate {} by dividing both sides by {}", VAR, coef)
}

/// `-3x / -3 = 7 / -3`
pub fn divide_equation_text(coef: i64, rhs: i64) -> String {
    format!("{} / {} = {} / {}", LinearExpr::term(coef), coef, rhs, coef)
}

/// `\frac{-3x}{-3} = \frac{7}{-3}`
pub fn divide_equation_latex(coef: i64, rhs: i64) -> String {
    format!(
        "\\frac{{{}}}{{{}}} = \\frac{{{}}}{{{}}}",
        LinearExpr::term(coef),
        coef,
        rhs,
        coef
    )
}

pub fn solution_message() -> String {
    "Solution".to_string()
}

pub fn solution_equation_text(value: &Rational) -> String {
    format!("{} = {}", VAR, value)
}

pub fn solution_equation_latex(value: &Rational) -> String {
    format!("{} = {}", VAR, value.to_latex())
}

pub fn identity_message() -> String {
    "The equation reduces to an identity, so there are infinitely many solutions".to_string()
}

pub fn contradiction_message() -> String {
    "The equation reduces to a contradiction, so there are no solutions".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_variable_message_picks_verb_from_sign() {
        assert_eq!(
            collect_variable_message(2),
            "Move x-terms to the left side by subtracting 2x from both sides"
        );
        assert_eq!(
            collect_variable_message(-7),
            "Move x-terms to the left side by adding 7x to both sides"
        );
    }

    #[test]
    fn collect_variable_message_elides_unit_coefficient() {
        assert_eq!(
            collect_variable_message(-1),
            "Move x-terms to the left side by adding x to both sides"
        );
    }

    #[test]
    fn collect_constants_message_uses_magnitude() {
        assert_eq!(
            collect_constants_message(1),
            "Move constants to the right side by subtracting 1 from both sides"
        );
        assert_eq!(
            collect_constants_message(-12),
            "Move constants to the right side by adding 12 to both sides"
        );
    }

    #[test]
    fn divide_texts_show_both_sides() {
        assert_eq!(divide_message(-3), "Isolate x by dividing both sides by -3");
        assert_eq!(divide_equation_text(-3, 7), "-3x / -3 = 7 / -3");
        assert_eq!(
            divide_equation_latex(3, 7),
            "\\frac{3x}{3} = \\frac{7}{3}"
        );
    }

    #[test]
    fn solution_texts_render_exact_values() {
        let value = Rational::new(-7, 3).unwrap();
        assert_eq!(solution_equation_text(&value), "x = -7/3");
        assert_eq!(solution_equation_latex(&value), "x = -\\frac{7}{3}");
    }

    #[test]
    fn degenerate_messages_carry_host_keywords() {
        assert!(identity_message().contains("infinitely many solutions"));
        assert!(contradiction_message().contains("no solutions"));
    }
}
