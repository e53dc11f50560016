//! Dashboard module
//!
//! Provides the page for adding entries and the monthly report that
//! reconciles expenses and salary payments for a single month.

mod aggregation;
mod charts;
mod forms;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
