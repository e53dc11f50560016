//! Defines the endpoint for deleting a salary entry.
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

use crate::{AppState, Error, PayDate, SalaryEntry, SalaryStore, YearMonth, endpoints};

/// The state needed to delete a salary entry.
#[derive(Debug, Clone)]
pub struct DeleteSalaryState {
    /// The store the entry is deleted from.
    pub salary_store: Arc<Mutex<SalaryStore>>,
}

impl FromRef<AppState> for DeleteSalaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            salary_store: state.salary_store.clone(),
        }
    }
}

/// The form data for deleting a salary entry: its position in the salary file
/// and the entry that was displayed at that position.
#[derive(Debug, Deserialize)]
pub struct DeleteSalaryForm {
    /// The position of the entry in the salary file.
    pub index: usize,
    /// The start date of the displayed entry.
    pub start_date: Date,
    /// The end date of the displayed entry.
    pub end_date: Date,
    /// The salary of the displayed entry.
    pub salary: f64,
    /// The pay date of the displayed entry, as it was displayed.
    pub pay_date: String,
}

impl DeleteSalaryForm {
    fn expected_entry(&self) -> SalaryEntry {
        SalaryEntry {
            start_date: self.start_date,
            end_date: self.end_date,
            salary: self.salary,
            pay_date: PayDate::parse(&self.pay_date),
        }
    }
}

/// The `hx-vals` JSON for a button that deletes `entry` at position `index`.
pub fn delete_salary_values(index: usize, entry: &SalaryEntry) -> String {
    json!({
        "index": index,
        "start_date": entry.start_date.to_string(),
        "end_date": entry.end_date.to_string(),
        "salary": entry.salary,
        "pay_date": entry.pay_date.to_string(),
    })
    .to_string()
}

/// A route handler for deleting a salary entry, redirects to the dashboard for
/// the month the entry was displayed in on success.
pub async fn delete_salary_endpoint(
    State(state): State<DeleteSalaryState>,
    Form(form): Form<DeleteSalaryForm>,
) -> Response {
    let expected = form.expected_entry();

    let store = match state.salary_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire salary store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match store.delete_matching(form.index, &expected) {
        Ok(()) => {
            tracing::info!("Deleted salary entry {}: {expected:?}", form.index);

            // Only entries with a parsed pay date are listed on the dashboard.
            let month = expected
                .pay_month()
                .unwrap_or_else(|| YearMonth::from_date(expected.start_date));

            (
                HxRedirect(endpoints::dashboard_for_month(month)),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(Error::DeleteMissingSalary) => Error::DeleteMissingSalary.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting salary entry {}: {error}",
                form.index
            );
            error.into_alert_response()
        }
    }
}
