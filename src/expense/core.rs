//! The expense entry model and the CSV file that stores expense entries.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    BudgetConfig, Error,
    month::{YearMonth, parse_date},
    store::{CsvEntry, CsvStore},
};

/// The expense entries stored in a CSV file, in the order they were added.
pub type ExpenseStore = CsvStore<ExpenseEntry>;

/// An amount spent on one category on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEntry {
    /// The date the money was spent.
    pub date: Date,
    /// The budget category the money was spent on.
    pub category: String,
    /// The amount spent in dollars.
    pub amount_spent: f64,
    /// The budget for the category at the time the entry was created.
    pub budgeted_amount: f64,
}

impl ExpenseEntry {
    /// Create an expense entry, copying the category's budget from `config`.
    ///
    /// The budget is copied so that changing the budget configuration later does
    /// not change existing entries.
    ///
    /// # Errors
    /// Returns [Error::InvalidCategory] if `category` is not in `config`, or
    /// [Error::NegativeAmount] if `amount_spent` is less than zero, or
    /// [Error::NonFiniteAmount] if `amount_spent` is `NaN` or infinite.
    pub fn new(
        date: Date,
        category: &str,
        amount_spent: f64,
        config: &BudgetConfig,
    ) -> Result<Self, Error> {
        let budgeted_amount = config.budget_for(category)?;

        if !amount_spent.is_finite() {
            return Err(Error::NonFiniteAmount(amount_spent));
        }

        if amount_spent < 0.0 {
            return Err(Error::NegativeAmount(amount_spent));
        }

        Ok(Self {
            date,
            category: category.to_owned(),
            amount_spent,
            budgeted_amount,
        })
    }

    /// The month the money was spent in.
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// A row of the expense CSV file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount Spent")]
    amount_spent: f64,
    #[serde(rename = "Budgeted Amount")]
    budgeted_amount: f64,
}

impl CsvEntry for ExpenseEntry {
    type Record = ExpenseRecord;

    const HEADERS: &'static [&'static str] =
        &["Date", "Category", "Amount Spent", "Budgeted Amount"];

    fn from_record(record: Self::Record) -> Result<Self, Error> {
        Ok(Self {
            date: parse_date(&record.date)?,
            category: record.category,
            amount_spent: record.amount_spent,
            budgeted_amount: record.budgeted_amount,
        })
    }

    fn to_record(&self) -> Self::Record {
        ExpenseRecord {
            date: self.date.to_string(),
            category: self.category.clone(),
            amount_spent: self.amount_spent,
            budgeted_amount: self.budgeted_amount,
        }
    }

    fn missing_entry_error() -> Error {
        Error::DeleteMissingExpense
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use time::macros::date;

    use crate::{BudgetConfig, Error, test_utils::TempCsvPath};

    use super::{ExpenseEntry, ExpenseStore};

    #[test]
    fn new_copies_category_budget() {
        let config = BudgetConfig::default();

        let entry = ExpenseEntry::new(date!(2024 - 06 - 01), "Food", 20.0, &config).unwrap();

        assert_eq!(
            entry,
            ExpenseEntry {
                date: date!(2024 - 06 - 01),
                category: "Food".to_owned(),
                amount_spent: 20.0,
                budgeted_amount: 50.0,
            }
        );
    }

    #[test]
    fn stored_budget_is_unaffected_by_later_config_changes() {
        let path = TempCsvPath::new("budget_snapshot");
        let store = ExpenseStore::new(path.as_path());
        let old_config = BudgetConfig::default();
        store
            .append(ExpenseEntry::new(date!(2024 - 06 - 01), "Food", 20.0, &old_config).unwrap())
            .unwrap();
        let new_config = BudgetConfig::new(vec![("Food".to_owned(), 75.0)], 800.0);
        store
            .append(ExpenseEntry::new(date!(2024 - 06 - 02), "Food", 10.0, &new_config).unwrap())
            .unwrap();

        let budgets: Vec<f64> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|entry| entry.budgeted_amount)
            .collect();

        assert_eq!(budgets, vec![50.0, 75.0]);
    }

    #[test]
    fn new_rejects_unknown_category() {
        let config = BudgetConfig::default();

        let result = ExpenseEntry::new(date!(2024 - 06 - 01), "Holidays", 20.0, &config);

        assert_eq!(result, Err(Error::InvalidCategory("Holidays".to_owned())));
    }

    #[test]
    fn new_rejects_negative_amount() {
        let config = BudgetConfig::default();

        let result = ExpenseEntry::new(date!(2024 - 06 - 01), "Food", -1.0, &config);

        assert_eq!(result, Err(Error::NegativeAmount(-1.0)));
    }

    #[test]
    fn new_rejects_non_finite_amounts() {
        let config = BudgetConfig::default();

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = ExpenseEntry::new(date!(2024 - 06 - 01), "Food", amount, &config);

            assert!(
                matches!(result, Err(Error::NonFiniteAmount(_))),
                "want {amount} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn store_accepts_categories_outside_the_config() {
        let path = TempCsvPath::new("unknown_category");
        let store = ExpenseStore::new(path.as_path());
        let entry = ExpenseEntry {
            date: date!(2024 - 06 - 01),
            category: "Holidays".to_owned(),
            amount_spent: 300.0,
            budgeted_amount: 0.0,
        };

        store.append(entry.clone()).unwrap();

        assert_eq!(store.load_all(), Ok(vec![entry]));
    }

    #[test]
    fn writes_header_and_iso_dates() {
        let path = TempCsvPath::new("expense_format");
        let store = ExpenseStore::new(path.as_path());

        store
            .append(ExpenseEntry {
                date: date!(2024 - 06 - 01),
                category: "House Rent".to_owned(),
                amount_spent: 430.0,
                budgeted_amount: 430.0,
            })
            .unwrap();

        assert_eq!(
            fs::read_to_string(path.as_path()).unwrap(),
            "Date,Category,Amount Spent,Budgeted Amount\n2024-06-01,House Rent,430.0,430.0\n"
        );
    }

    #[test]
    fn invalid_date_is_an_error() {
        let path = TempCsvPath::new("expense_bad_date");
        fs::write(
            path.as_path(),
            "Date,Category,Amount Spent,Budgeted Amount\n01/06/2024,Food,20,50\n",
        )
        .unwrap();
        let store = ExpenseStore::new(path.as_path());

        assert_eq!(
            store.load_all(),
            Err(Error::InvalidDate("01/06/2024".to_owned()))
        );
    }

    #[test]
    fn month_is_the_month_of_the_date() {
        let entry = ExpenseEntry {
            date: date!(2024 - 06 - 30),
            category: "Food".to_owned(),
            amount_spent: 1.0,
            budgeted_amount: 50.0,
        };

        assert_eq!(entry.month().to_string(), "2024-06");
    }
}
