//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{BudgetConfig, Error, ExpenseStore, SalaryStore, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for daily expense entries.
    pub expense_store: Arc<Mutex<ExpenseStore>>,

    /// The store for salary entries.
    pub salary_store: Arc<Mutex<SalaryStore>>,

    /// The category budgets and base monthly income.
    pub budget_config: Arc<BudgetConfig>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        expense_store: ExpenseStore,
        salary_store: SalaryStore,
        budget_config: BudgetConfig,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            expense_store: Arc::new(Mutex::new(expense_store)),
            salary_store: Arc::new(Mutex::new(salary_store)),
            budget_config: Arc::new(budget_config),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
