//! Month filtering and totals for the dashboard.
//!
//! Expenses and salary payments are stored in separate files. The functions in
//! this module reconcile both into the figures shown for a single month.

use std::collections::{BTreeMap, BTreeSet};

use crate::{BudgetConfig, ExpenseEntry, SalaryEntry, YearMonth};

/// An entry paired with its position in the store it was loaded from.
///
/// The position is what the delete endpoints need to identify the entry.
#[derive(Debug, PartialEq)]
pub(super) struct IndexedEntry<'a, T> {
    pub index: usize,
    pub entry: &'a T,
}

/// The months that have at least one expense or one salary payment.
///
/// Salary entries whose pay date could not be parsed do not contribute a month.
///
/// # Returns
/// Distinct months in chronological order.
pub(super) fn month_universe(expenses: &[ExpenseEntry], salaries: &[SalaryEntry]) -> Vec<YearMonth> {
    let months: BTreeSet<YearMonth> = expenses
        .iter()
        .map(ExpenseEntry::month)
        .chain(salaries.iter().filter_map(SalaryEntry::pay_month))
        .collect();

    months.into_iter().collect()
}

/// The expenses spent in `month`, in store order.
pub(super) fn expenses_in_month(
    expenses: &[ExpenseEntry],
    month: YearMonth,
) -> Vec<IndexedEntry<'_, ExpenseEntry>> {
    expenses
        .iter()
        .enumerate()
        .filter(|(_, entry)| month.contains(entry.date))
        .map(|(index, entry)| IndexedEntry { index, entry })
        .collect()
}

/// The salary payments credited in `month`, in store order.
pub(super) fn salaries_paid_in_month(
    salaries: &[SalaryEntry],
    month: YearMonth,
) -> Vec<IndexedEntry<'_, SalaryEntry>> {
    salaries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.pay_month() == Some(month))
        .map(|(index, entry)| IndexedEntry { index, entry })
        .collect()
}

/// Totals for the expenses of one month.
#[derive(Debug, PartialEq)]
pub(super) struct ExpenseSummary {
    /// The amount spent per category, ordered by category label.
    pub spent_by_category: BTreeMap<String, f64>,
    pub total_spent: f64,
    pub total_budgeted: f64,
    /// The base monthly income minus the total spent.
    pub remaining_budget: f64,
    /// The base monthly income minus the total spent.
    pub remaining_savings: f64,
}

/// Summarize the expenses of a month.
///
/// # Returns
/// `None` if `expenses` is empty.
pub(super) fn summarize_expenses(
    expenses: &[IndexedEntry<'_, ExpenseEntry>],
    config: &BudgetConfig,
) -> Option<ExpenseSummary> {
    if expenses.is_empty() {
        return None;
    }

    let mut spent_by_category = BTreeMap::new();
    let mut total_budgeted = 0.0;

    for IndexedEntry { entry, .. } in expenses {
        *spent_by_category
            .entry(entry.category.clone())
            .or_insert(0.0) += entry.amount_spent;
        total_budgeted += entry.budgeted_amount;
    }

    let total_spent: f64 = spent_by_category.values().sum();
    let base_income = config.base_monthly_income();

    Some(ExpenseSummary {
        spent_by_category,
        total_spent,
        total_budgeted,
        remaining_budget: base_income - total_spent,
        remaining_savings: base_income - total_spent,
    })
}

/// The total salary of the pay periods that start in `month`.
///
/// Note that this selects entries by start date, while the salary table on the
/// dashboard lists entries by pay date.
pub(super) fn total_salary_for_month(salaries: &[SalaryEntry], month: YearMonth) -> f64 {
    salaries
        .iter()
        .filter(|entry| entry.start_month() == month)
        .map(|entry| entry.salary)
        .sum()
}

/// Everything shown on the dashboard for one month.
#[derive(Debug, PartialEq)]
pub(super) struct MonthlyReport<'a> {
    pub month: YearMonth,
    pub expenses: Vec<IndexedEntry<'a, ExpenseEntry>>,
    pub expense_summary: Option<ExpenseSummary>,
    pub salaries: Vec<IndexedEntry<'a, SalaryEntry>>,
    pub total_salary: f64,
    /// The base monthly income plus the total salary.
    pub total_income: f64,
}

impl<'a> MonthlyReport<'a> {
    pub(super) fn build(
        month: YearMonth,
        expenses: &'a [ExpenseEntry],
        salaries: &'a [SalaryEntry],
        config: &BudgetConfig,
    ) -> Self {
        let month_expenses = expenses_in_month(expenses, month);
        let expense_summary = summarize_expenses(&month_expenses, config);
        let total_salary = total_salary_for_month(salaries, month);

        Self {
            month,
            expenses: month_expenses,
            expense_summary,
            salaries: salaries_paid_in_month(salaries, month),
            total_salary,
            total_income: config.base_monthly_income() + total_salary,
        }
    }
}
