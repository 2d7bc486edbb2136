/// Attempt budget for constrained coefficient sampling.
///
/// Rejection sampling stops after `max_attempts` draws instead of looping
/// forever on an unsatisfiable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationBudget {
    /// Maximum number of draws (0 = no draws allowed)
    pub max_attempts: usize,
    used: usize,
}

impl GenerationBudget {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            used: 0,
        }
    }

    /// Consume one attempt. Returns false once the budget is spent.
    pub fn try_consume(&mut self) -> bool {
        if self.used >= self.max_attempts {
            return false;
        }
        self.used += 1;
        true
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationBudget;

    #[test]
    fn budget_counts_attempts() {
        let mut budget = GenerationBudget::new(2);
        assert!(budget.try_consume());
        assert!(budget.try_consume());
        assert!(!budget.try_consume());
        assert_eq!(budget.used(), 2);
        assert!(budget.is_exhausted());
    }

    #[test]
    fn zero_budget_allows_nothing() {
        let mut budget = GenerationBudget::new(0);
        assert!(budget.is_exhausted());
        assert!(!budget.try_consume());
        assert_eq!(budget.used(), 0);
    }
}
