use linquiz_solver_core::SolveStep;

/// Numbered step lines as shown in the terminal.
pub fn format_steps(steps: &[SolveStep], latex: bool) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if latex {
                format!("Step {}: {}: ${}$", i + 1, step.description, step.latex)
            } else {
                format!("Step {}: {}", i + 1, step)
            }
        })
        .collect()
}

pub fn print_steps(steps: &[SolveStep], latex: bool) {
    for line in format_steps(steps, latex) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linquiz_ast::Equation;
    use linquiz_solver_core::solve_steps;

    #[test]
    fn steps_are_numbered_from_one() {
        let steps = solve_steps(&Equation::new(3, 1, 0, 8)).unwrap();
        let lines = format_steps(&steps, false);
        assert_eq!(lines[0], "Step 1: Original equation: 3x + 1 = 8");
        assert_eq!(lines.last().unwrap(), "Step 4: Solution: x = 7/3");
    }

    #[test]
    fn latex_mode_wraps_math() {
        let steps = solve_steps(&Equation::new(3, 1, 0, 8)).unwrap();
        let lines = format_steps(&steps, true);
        assert_eq!(lines.last().unwrap(), "Step 4: Solution: $x = \\frac{7}{3}$");
    }
}
