//! Daily expense entries and the endpoints for adding and deleting them.

mod core;
mod create_endpoint;
mod delete_endpoint;

pub use self::core::{ExpenseEntry, ExpenseStore};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::{delete_expense_endpoint, delete_expense_values};
