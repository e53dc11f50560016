//! Salary payments: the salary entry model, its CSV store and the endpoints
//! for adding and deleting salary entries.

mod core;
mod create_endpoint;
mod delete_endpoint;

pub use self::core::{PayDate, SalaryEntry, SalaryStore};
pub use create_endpoint::create_salary_endpoint;
pub use delete_endpoint::{delete_salary_endpoint, delete_salary_values};
