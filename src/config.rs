//! The budget configuration: the per-category budgets and the base monthly income.

use crate::Error;

/// The fixed budget for each category and the base monthly income.
///
/// The configuration is an immutable value that is created once at start-up and
/// handed to the code that needs it, so tests can use their own budgets.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetConfig {
    /// Category labels and their monthly budgets, in display order.
    category_budgets: Vec<(String, f64)>,
    /// The income that is available every month before salary payments.
    base_monthly_income: f64,
}

impl BudgetConfig {
    /// Create a configuration from category budgets and the base monthly income.
    ///
    /// If a category appears more than once, the first budget is used.
    pub fn new(category_budgets: Vec<(String, f64)>, base_monthly_income: f64) -> Self {
        Self {
            category_budgets,
            base_monthly_income,
        }
    }

    /// The category labels in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_budgets
            .iter()
            .map(|(category, _)| category.as_str())
    }

    /// The budget for `category`.
    ///
    /// # Errors
    /// Returns [Error::InvalidCategory] if `category` is not in the configuration.
    pub fn budget_for(&self, category: &str) -> Result<f64, Error> {
        self.category_budgets
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, budget)| *budget)
            .ok_or_else(|| Error::InvalidCategory(category.to_owned()))
    }

    /// The income that is available every month before salary payments.
    pub fn base_monthly_income(&self) -> f64 {
        self.base_monthly_income
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        let category_budgets = [
            ("House Rent", 430.0),
            ("Shopping", 100.0),
            ("Groceries", 50.0),
            ("Food", 50.0),
            ("Transport", 20.0),
            ("Entertainment", 100.0),
        ]
        .into_iter()
        .map(|(category, budget)| (category.to_owned(), budget))
        .collect();

        Self::new(category_budgets, 800.0)
    }
}
