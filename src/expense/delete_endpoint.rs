//! Defines the endpoint for deleting an expense entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use serde_json::json;
use time::Date;

use crate::{AppState, Error, ExpenseEntry, ExpenseStore, endpoints};

/// The state needed to delete an expense entry.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store the entry is deleted from.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The form data for deleting an expense entry.
///
/// Along with the position of the entry, the client sends the entry it
/// displayed so that the server can check that the position still refers to
/// the same entry.
#[derive(Debug, Deserialize)]
pub struct DeleteExpenseForm {
    /// The position of the entry in the expense file.
    pub index: usize,
    /// The date of the displayed entry.
    pub date: Date,
    /// The category of the displayed entry.
    pub category: String,
    /// The amount spent of the displayed entry.
    pub amount_spent: f64,
    /// The budgeted amount of the displayed entry.
    pub budgeted_amount: f64,
}

impl DeleteExpenseForm {
    fn expected_entry(&self) -> ExpenseEntry {
        ExpenseEntry {
            date: self.date,
            category: self.category.clone(),
            amount_spent: self.amount_spent,
            budgeted_amount: self.budgeted_amount,
        }
    }
}

/// The `hx-vals` JSON for a button that deletes `entry` at position `index`.
pub fn delete_expense_values(index: usize, entry: &ExpenseEntry) -> String {
    json!({
        "index": index,
        "date": entry.date.to_string(),
        "category": entry.category,
        "amount_spent": entry.amount_spent,
        "budgeted_amount": entry.budgeted_amount,
    })
    .to_string()
}

/// A route handler for deleting an expense entry, redirects to the dashboard
/// for the entry's month on success.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Form(form): Form<DeleteExpenseForm>,
) -> Response {
    let expected = form.expected_entry();

    let store = match state.expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match store.delete_matching(form.index, &expected) {
        Ok(()) => {
            tracing::info!("Deleted expense entry {}: {expected:?}", form.index);

            (
                HxRedirect(endpoints::dashboard_for_month(expected.month())),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(Error::DeleteMissingExpense) => Error::DeleteMissingExpense.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting expense {}: {error}",
                form.index
            );
            error.into_alert_response()
        }
    }
}
