//! Defines the endpoint for adding a new expense entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{AppState, BudgetConfig, Error, ExpenseEntry, ExpenseStore, endpoints};

/// The state needed to add an expense entry.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store the new entry is appended to.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// The budget table that the entry's budgeted amount is copied from.
    pub budget_config: Arc<BudgetConfig>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            budget_config: state.budget_config.clone(),
        }
    }
}

/// The form data for adding an expense entry.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The date the money was spent.
    pub date: Date,
    /// The budget category, one of the configured categories.
    pub category: String,
    /// The amount spent in dollars.
    pub amount_spent: f64,
}

/// A route handler for adding an expense entry, redirects to the dashboard for
/// the entry's month on success.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let entry = match ExpenseEntry::new(
        form.date,
        &form.category,
        form.amount_spent,
        &state.budget_config,
    ) {
        Ok(entry) => entry,
        Err(error) => {
            tracing::warn!("rejected expense entry {form:?}: {error}");
            return error.into_alert_response();
        }
    };
    let month = entry.month();

    let store = match state.expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if let Err(error) = store.append(entry) {
        tracing::error!("could not add expense entry: {error}");
        return error.into_alert_response();
    }

    tracing::info!(
        "Entry for {} on {} added successfully!",
        form.category,
        form.date
    );

    (
        HxRedirect(endpoints::dashboard_for_month(month)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
