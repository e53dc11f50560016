//! The API endpoints URIs.
//!
//! For a link to the dashboard for a specific month, use [dashboard_for_month].

use crate::YearMonth;

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with the entry forms and the monthly report.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for adding an expense entry.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for deleting an expense entry.
pub const DELETE_EXPENSE: &str = "/api/expenses/delete";
/// The route for adding a salary entry.
pub const SALARIES_API: &str = "/api/salaries";
/// The route for deleting a salary entry.
pub const DELETE_SALARY: &str = "/api/salaries/delete";

/// The query parameter used to select the month shown on the dashboard.
pub const MONTH_QUERY_PARAM: &str = "month";

/// The URI of the dashboard showing `month`.
pub fn dashboard_for_month(month: YearMonth) -> String {
    format!("{DASHBOARD_VIEW}?{MONTH_QUERY_PARAM}={month}")
}
