//! Defines the endpoint for adding a new salary entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error, SalaryEntry, SalaryStore, YearMonth, endpoints};

/// The state needed to add a salary entry.
#[derive(Debug, Clone)]
pub struct CreateSalaryState {
    /// The store the new entry is appended to.
    pub salary_store: Arc<Mutex<SalaryStore>>,
}

impl FromRef<AppState> for CreateSalaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            salary_store: state.salary_store.clone(),
        }
    }
}

/// The form data for adding a salary entry.
#[derive(Debug, Deserialize)]
pub struct SalaryForm {
    /// The first day of the pay period.
    pub start_date: Date,
    /// The last day of the pay period.
    pub end_date: Date,
    /// The amount paid for the period.
    pub salary: f64,
    /// The date the salary is credited.
    pub pay_date: Date,
}

/// A route handler for adding a salary entry, redirects to the dashboard for
/// the month of the pay date on success.
pub async fn create_salary_endpoint(
    State(state): State<CreateSalaryState>,
    Form(form): Form<SalaryForm>,
) -> Response {
    let entry = match SalaryEntry::new(form.start_date, form.end_date, form.salary, form.pay_date)
    {
        Ok(entry) => entry,
        Err(error) => {
            tracing::warn!("rejected salary entry {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    let store = match state.salary_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire salary store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if let Err(error) = store.append(entry) {
        tracing::error!("could not add salary entry: {error}");
        return error.into_alert_response();
    }

    tracing::info!(
        "Salary entry for {} to {} added successfully!",
        form.start_date,
        form.end_date
    );

    (
        HxRedirect(endpoints::dashboard_for_month(YearMonth::from_date(
            form.pay_date,
        ))),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
