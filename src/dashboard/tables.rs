//! Table views for the entries and totals of a month.

use maud::{Markup, html};

use crate::{
    ExpenseEntry, SalaryEntry, YearMonth,
    dashboard::aggregation::{ExpenseSummary, IndexedEntry},
    endpoints,
    expense::delete_expense_values,
    html::{
        BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
    salary::delete_salary_values,
};

const TABLE_STYLE: &str = "w-full text-sm text-left text-gray-500 dark:text-gray-400";
const SECTION_HEADER_STYLE: &str = "text-xl font-semibold mb-4";
const PLACEHOLDER_STYLE: &str = "text-gray-600 dark:text-gray-400";

/// Renders the expenses of a month with a delete button for each row.
pub(super) fn expense_table(month: YearMonth, expenses: &[IndexedEntry<'_, ExpenseEntry>]) -> Markup {
    html! {
        section id="expenses" class="w-full mb-8" {
            h3 class=(SECTION_HEADER_STYLE) { "Daily Expense Tracker" }

            @if expenses.is_empty() {
                p class=(PLACEHOLDER_STYLE) { "No data available for " (month) " yet." }
            } @else {
                div class="overflow-x-auto rounded-lg shadow" {
                    table class=(TABLE_STYLE) {
                        thead class=(TABLE_HEADER_STYLE) {
                            tr {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount Spent" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Budgeted Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                            }
                        }
                        tbody {
                            @for row in expenses {
                                @let (index, entry) = (row.index, row.entry);
                                tr class=(TABLE_ROW_STYLE) {
                                    td class=(TABLE_CELL_STYLE) { (entry.date) }
                                    td class=(TABLE_CELL_STYLE) { (entry.category) }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(entry.amount_spent)) }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(entry.budgeted_amount)) }
                                    td class=(TABLE_CELL_STYLE) {
                                        button
                                            type="button"
                                            class=(BUTTON_DELETE_STYLE)
                                            hx-post=(endpoints::DELETE_EXPENSE)
                                            hx-vals=(delete_expense_values(index, entry))
                                            hx-confirm={
                                                "Delete the " (entry.category) " expense on " (entry.date) "?"
                                            }
                                            hx-target-error="#alert-container"
                                        {
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the expense totals of a month.
pub(super) fn monthly_overview(month: YearMonth, summary: &ExpenseSummary) -> Markup {
    let rows = [
        ("Total Spent", summary.total_spent),
        ("Total Budgeted", summary.total_budgeted),
        ("Remaining Budget", summary.remaining_budget),
        ("Remaining Savings", summary.remaining_savings),
    ];

    html! {
        section id="overview" class="w-full mb-8" {
            h3 class=(SECTION_HEADER_STYLE) { "Monthly Overview for " (month) }

            div class="overflow-x-auto rounded-lg shadow" {
                table class=(TABLE_STYLE) {
                    tbody {
                        @for (label, amount) in rows {
                            tr class=(TABLE_ROW_STYLE) {
                                th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} {
                                    (label)
                                }
                                td class=(TABLE_CELL_STYLE) { (format_currency(amount)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the total salary and total income of a month.
pub(super) fn income_summary(month: YearMonth, total_salary: f64, total_income: f64) -> Markup {
    html! {
        section id="income" class="w-full mb-8 grid grid-cols-1 md:grid-cols-2 gap-4" {
            div class="p-4 rounded-lg shadow bg-white dark:bg-gray-800" {
                h3 class="text-lg font-semibold" { "Total Salary for " (month) }
                p class="text-2xl" { (format_currency(total_salary)) }
            }

            div class="p-4 rounded-lg shadow bg-white dark:bg-gray-800" {
                h3 class="text-lg font-semibold" { "Total Monthly Income (Including Salary)" }
                p class="text-2xl" { (format_currency(total_income)) }
            }
        }
    }
}

/// Renders the salary payments credited in a month with a delete button for each row.
pub(super) fn salary_table(month: YearMonth, salaries: &[IndexedEntry<'_, SalaryEntry>]) -> Markup {
    html! {
        section id="salaries" class="w-full mb-8" {
            h3 class=(SECTION_HEADER_STYLE) { "Salary Data for " (month) }

            @if salaries.is_empty() {
                p class=(PLACEHOLDER_STYLE) { "No salary data available for " (month) "." }
            } @else {
                div class="overflow-x-auto rounded-lg shadow" {
                    table class=(TABLE_STYLE) {
                        thead class=(TABLE_HEADER_STYLE) {
                            tr {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Start Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "End Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Salary" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Pay Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                            }
                        }
                        tbody {
                            @for row in salaries {
                                @let (index, entry) = (row.index, row.entry);
                                tr class=(TABLE_ROW_STYLE) {
                                    td class=(TABLE_CELL_STYLE) { (entry.start_date) }
                                    td class=(TABLE_CELL_STYLE) { (entry.end_date) }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(entry.salary)) }
                                    td class=(TABLE_CELL_STYLE) { (entry.pay_date) }
                                    td class=(TABLE_CELL_STYLE) {
                                        button
                                            type="button"
                                            class=(BUTTON_DELETE_STYLE)
                                            hx-post=(endpoints::DELETE_SALARY)
                                            hx-vals=(delete_salary_values(index, entry))
                                            hx-confirm={
                                                "Delete the salary for " (entry.start_date) " to " (entry.end_date) "?"
                                            }
                                            hx-target-error="#alert-container"
                                        {
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
