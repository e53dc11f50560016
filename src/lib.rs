//! A web app for recording daily expenses and salary payments.
//!
//! Expenses and salary payments are kept in two flat CSV files. The dashboard
//! reconciles both files into a single monthly view with totals, the remaining
//! budget and a chart of spending by category.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod config;
mod dashboard;
mod endpoints;
mod expense;
mod html;
mod internal_server_error;
mod logging;
mod month;
mod not_found;
mod routing;
mod salary;
mod store;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::BudgetConfig;
pub use expense::{ExpenseEntry, ExpenseStore};
pub use logging::logging_middleware;
pub use month::YearMonth;
pub use routing::build_router;
pub use salary::{PayDate, SalaryEntry, SalaryStore};

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The category is not one of the categories in the budget configuration.
    #[error("\"{0}\" is not a budget category")]
    InvalidCategory(String),

    /// A negative amount was entered for an expense or salary.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// An amount that is not a finite number, such as `NaN` or `inf`, was
    /// entered for an expense or salary.
    #[error("{0} is not a finite amount")]
    NonFiniteAmount(f64),

    /// A month string was not in the format `YYYY-MM`.
    #[error("\"{0}\" is not a month in the format YYYY-MM")]
    InvalidMonth(String),

    /// A date string in a CSV file was not in the format `YYYY-MM-DD`.
    #[error("could not parse the date \"{0}\"")]
    InvalidDate(String),

    /// Tried to delete an expense that is not in the expense file.
    ///
    /// Either the index is out of range, or the entry at the index is not the
    /// entry the client expected to delete.
    #[error("tried to delete an expense that is not in the expense file")]
    DeleteMissingExpense,

    /// Tried to delete a salary entry that is not in the salary file.
    ///
    /// Either the index is out of range, or the entry at the index is not the
    /// entry the client expected to delete.
    #[error("tried to delete a salary entry that is not in the salary file")]
    DeleteMissingSalary,

    /// A CSV file could not be read or written.
    #[error("could not read or write CSV data: {0}")]
    CsvError(String),

    /// An I/O error other than a missing file.
    #[error("an unexpected I/O error occurred: {0}")]
    IoError(String),

    /// Could not acquire the lock for one of the stores.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        tracing::error!("a CSV error occurred: {value}");
        Error::CsvError(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        tracing::error!("an I/O error occurred: {value}");
        Error::IoError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidMonth(month) => (
                StatusCode::BAD_REQUEST,
                InternalServerError {
                    description: "Invalid Month",
                    fix: &format!("\"{month}\" is not a month. Months must look like 2024-06."),
                }
                .into_html(),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DeleteMissingExpense | Error::DeleteMissingSalary => {
                get_404_not_found_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!(
                        "\"{category}\" is not a budget category. Pick a category from the list."
                    ),
                },
            )
                .into_response(),
            Error::NegativeAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("{amount} is negative. Enter an amount of zero or more."),
                },
            )
                .into_response(),
            Error::NonFiniteAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("{amount} is not a number. Enter an amount in dollars."),
                },
            )
                .into_response(),
            Error::DeleteMissingExpense => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete expense".to_owned(),
                    details: "The expense could not be found. \
                        Try refreshing the page to see if the expense has already been deleted."
                        .to_owned(),
                },
            )
                .into_response(),
            Error::DeleteMissingSalary => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete salary entry".to_owned(),
                    details: "The salary entry could not be found. \
                        Try refreshing the page to see if the entry has already been deleted."
                        .to_owned(),
                },
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
                    .into_response()
            }
        }
    }
}
