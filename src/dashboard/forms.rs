//! The forms for adding entries and for choosing the month to display.

use maud::{Markup, html};
use time::Date;

use crate::{
    BudgetConfig, YearMonth, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

const FORM_STYLE: &str = "w-full space-y-4 p-4 rounded-lg shadow bg-white dark:bg-gray-800";

fn date_input(name: &str, id: &str, label: &str, value: Date) -> Markup {
    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(id)
                type="date"
                required
                value=(value)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn amount_input(name: &str, id: &str, label: &str) -> Markup {
    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name=(name)
                    id=(id)
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

/// The form for adding an expense, with the date defaulting to `today`.
pub(super) fn expense_form(today: Date, config: &BudgetConfig) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target-error="#alert-container"
            class=(FORM_STYLE)
        {
            h3 class="text-xl font-semibold" { "Add Expense" }

            (date_input("date", "expense-date", "Date", today))

            div
            {
                label for="expense-category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category"
                    id="expense-category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in config.categories() {
                        option value=(category) { (category) }
                    }
                }
            }

            (amount_input("amount_spent", "expense-amount", "Amount Spent"))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

/// The form for adding a salary payment, with all dates defaulting to `today`.
pub(super) fn salary_form(today: Date) -> Markup {
    html! {
        form
            hx-post=(endpoints::SALARIES_API)
            hx-target-error="#alert-container"
            class=(FORM_STYLE)
        {
            h3 class="text-xl font-semibold" { "Add Salary" }

            (date_input("start_date", "salary-start-date", "Start Date", today))
            (date_input("end_date", "salary-end-date", "End Date", today))
            (amount_input("salary", "salary-amount", "Salary"))
            (date_input("pay_date", "salary-pay-date", "Pay Date", today))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Salary" }
        }
    }
}

/// A form that reloads the dashboard for the chosen month.
pub(super) fn month_selector(months: &[YearMonth], selected: YearMonth) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::DASHBOARD_VIEW)
            class="flex items-end gap-2 mb-8"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }

                select
                    name=(endpoints::MONTH_QUERY_PARAM)
                    id="month"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for month in months {
                        option value=(month) selected[*month == selected] { (month) }
                    }
                }
            }

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Show" }
            }
        }
    }
}
