//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, BudgetConfig, Error, ExpenseEntry, ExpenseStore, SalaryEntry, SalaryStore,
    YearMonth,
    dashboard::{
        aggregation::{MonthlyReport, month_universe},
        charts::{DashboardChart, charts_script, charts_view, spending_by_category_chart},
        forms::{expense_form, month_selector, salary_form},
        tables::{expense_table, income_summary, monthly_overview, salary_table},
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    timezone::get_local_date,
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store for daily expense entries.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// The store for salary entries.
    pub salary_store: Arc<Mutex<SalaryStore>>,
    /// The category budgets and base monthly income.
    pub budget_config: Arc<BudgetConfig>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            salary_store: state.salary_store.clone(),
            budget_config: state.budget_config.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The month to display in the format `YYYY-MM`.
    ///
    /// Defaults to the most recent month with data.
    pub month: Option<String>,
}

/// Display the entry forms and the report for the requested month.
///
/// # Errors
/// Returns [Error::InvalidMonth] if the month query parameter is not in the
/// format `YYYY-MM`, or an error if either store cannot be loaded.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let requested_month = match query.month.as_deref().map(str::trim) {
        Some(month) if !month.is_empty() => Some(month.parse::<YearMonth>()?),
        _ => None,
    };

    let today = get_local_date(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let (expenses, salaries) = load_entries(&state)?;

    let mut months = month_universe(&expenses, &salaries);

    let Some(latest_month) = months.last().copied() else {
        return Ok(dashboard_no_data_view(today, &state.budget_config).into_response());
    };

    let selected_month = requested_month.unwrap_or(latest_month);
    if let Err(position) = months.binary_search(&selected_month) {
        months.insert(position, selected_month);
    }

    let report = MonthlyReport::build(selected_month, &expenses, &salaries, &state.budget_config);

    Ok(dashboard_view(today, &state.budget_config, &months, &report).into_response())
}

/// Load all entries from both stores.
///
/// The expense store is always locked before the salary store.
fn load_entries(state: &DashboardState) -> Result<(Vec<ExpenseEntry>, Vec<SalaryEntry>), Error> {
    let expenses = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .load_all()
        .inspect_err(|error| tracing::error!("could not load expenses: {error}"))?;

    let salaries = state
        .salary_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire salary store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .load_all()
        .inspect_err(|error| tracing::error!("could not load salary entries: {error}"))?;

    Ok((expenses, salaries))
}

fn entry_forms(today: Date, config: &BudgetConfig) -> Markup {
    html!(
        section id="entry-forms" class="w-full grid grid-cols-1 md:grid-cols-2 gap-4 mb-8"
        {
            (expense_form(today, config))
            (salary_form(today))
        }
    )
}

/// Renders the dashboard page when neither file has any entries.
fn dashboard_no_data_view(today: Date, config: &BudgetConfig) -> Markup {
    let content = html!(
        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            h1 class="text-2xl font-bold mb-8" { "Daily Budget" }

            (entry_forms(today, config))

            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "The monthly report will show up here once you add an expense or a salary payment."
            }
        }
    );

    base("Dashboard", &[dollar_input_styles()], &content)
}

/// Renders the entry forms and the report for one month.
fn dashboard_view(
    today: Date,
    config: &BudgetConfig,
    months: &[YearMonth],
    report: &MonthlyReport<'_>,
) -> Markup {
    let month = report.month;
    let charts: Vec<DashboardChart> = report
        .expense_summary
        .iter()
        .map(|summary| DashboardChart {
            id: "spending-by-category-chart",
            options: spending_by_category_chart(month, summary).to_string(),
        })
        .collect();

    let content = html!(
        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            h1 class="text-2xl font-bold mb-8" { "Daily Budget" }

            (entry_forms(today, config))

            (month_selector(months, month))

            (expense_table(month, &report.expenses))

            @if let Some(summary) = &report.expense_summary {
                (monthly_overview(month, summary))
                (charts_view(&charts))
            }

            (income_summary(month, report.total_salary, report.total_income))

            (salary_table(month, &report.salaries))
        }
    );

    let mut head_elements = vec![dollar_input_styles()];
    if !charts.is_empty() {
        head_elements.push(HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()));
        head_elements.push(charts_script(&charts));
    }

    base("Dashboard", &head_elements, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        BudgetConfig, Error, ExpenseEntry, ExpenseStore, SalaryEntry, SalaryStore,
        test_utils::{TempCsvPath, assert_html_page, assert_valid_html, parse_html_document},
    };

    use super::{DashboardQuery, DashboardState, get_dashboard_page};

    struct TestFiles {
        expenses: TempCsvPath,
        salaries: TempCsvPath,
    }

    impl TestFiles {
        fn new(name: &str) -> Self {
            Self {
                expenses: TempCsvPath::new(&format!("{name}_expenses")),
                salaries: TempCsvPath::new(&format!("{name}_salaries")),
            }
        }

        fn state(&self) -> DashboardState {
            DashboardState {
                expense_store: Arc::new(Mutex::new(ExpenseStore::new(self.expenses.as_path()))),
                salary_store: Arc::new(Mutex::new(SalaryStore::new(self.salaries.as_path()))),
                budget_config: Arc::new(BudgetConfig::default()),
                local_timezone: "Etc/UTC".to_owned(),
            }
        }
    }

    fn query(month: Option<&str>) -> Query<DashboardQuery> {
        Query(DashboardQuery {
            month: month.map(str::to_owned),
        })
    }

    fn page_text(html: &Html) -> String {
        html.root_element().text().collect()
    }

    fn add_expense(state: &DashboardState, date: time::Date, category: &str, amount: f64) {
        let entry = ExpenseEntry::new(date, category, amount, &state.budget_config).unwrap();
        state.expense_store.lock().unwrap().append(entry).unwrap();
    }

    fn add_salary(state: &DashboardState, start_date: time::Date, pay_date: time::Date) {
        let entry = SalaryEntry::new(
            start_date,
            start_date.saturating_add(time::Duration::days(13)),
            500.0,
            pay_date,
        )
        .unwrap();
        state.salary_store.lock().unwrap().append(entry).unwrap();
    }

    #[tokio::test]
    async fn shows_no_data_view_for_empty_files() {
        let files = TestFiles::new("dashboard_empty");

        let response = get_dashboard_page(State(files.state()), query(None))
            .await
            .unwrap();

        assert_html_page(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = page_text(&html);
        assert!(text.contains("Nothing here yet"));
        assert_eq!(html.select(&Selector::parse("form").unwrap()).count(), 2);
        assert_eq!(html.select(&Selector::parse("table").unwrap()).count(), 0);
    }

    #[tokio::test]
    async fn defaults_to_latest_month() {
        let files = TestFiles::new("dashboard_latest");
        let state = files.state();
        add_expense(&state, date!(2024 - 05 - 03), "Food", 10.0);
        add_expense(&state, date!(2024 - 06 - 01), "Food", 20.0);

        let response = get_dashboard_page(State(state), query(None)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = page_text(&html);
        assert!(text.contains("Monthly Overview for 2024-06"));
        assert!(!text.contains("2024-05-03"));
        assert!(text.contains("No salary data available for 2024-06."));
        assert!(
            html.select(&Selector::parse("#spending-by-category-chart").unwrap())
                .next()
                .is_some()
        );
    }

    #[tokio::test]
    async fn shows_requested_month() {
        let files = TestFiles::new("dashboard_requested");
        let state = files.state();
        add_expense(&state, date!(2024 - 05 - 03), "Transport", 4.0);
        add_expense(&state, date!(2024 - 06 - 01), "Food", 20.0);

        let response = get_dashboard_page(State(state), query(Some("2024-05")))
            .await
            .unwrap();

        let text = page_text(&parse_html_document(response).await);
        assert!(text.contains("Monthly Overview for 2024-05"));
        assert!(text.contains("2024-05-03"));
        assert!(!text.contains("2024-06-01"));
    }

    #[tokio::test]
    async fn salary_only_month_shows_income_without_overview() {
        let files = TestFiles::new("dashboard_salary_only");
        let state = files.state();
        add_salary(&state, date!(2024 - 06 - 01), date!(2024 - 06 - 15));

        let response = get_dashboard_page(State(state), query(None)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = page_text(&html);
        assert!(text.contains("No data available for 2024-06 yet."));
        assert!(!text.contains("Monthly Overview"));
        assert!(text.contains("Total Salary for 2024-06"));
        assert!(text.contains("Total Monthly Income (Including Salary)"));
        assert!(text.contains("Salary Data for 2024-06"));
        assert!(
            html.select(&Selector::parse("#charts").unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn legacy_salary_is_listed_under_end_date_month() {
        let files = TestFiles::new("dashboard_legacy_salary");
        std::fs::write(
            files.salaries.as_path(),
            "Start Date,End Date,Salary\n2024-06-17,2024-07-01,500.0\n",
        )
        .unwrap();
        let state = files.state();

        let response = get_dashboard_page(State(state), query(None)).await.unwrap();

        let text = page_text(&parse_html_document(response).await);
        assert!(text.contains("Salary Data for 2024-07"));
        assert!(text.contains("2024-06-17"));
    }

    #[tokio::test]
    async fn empty_month_parameter_uses_default() {
        let files = TestFiles::new("dashboard_empty_param");
        let state = files.state();
        add_expense(&state, date!(2024 - 06 - 01), "Food", 20.0);

        let response = get_dashboard_page(State(state), query(Some("")))
            .await
            .unwrap();

        let text = page_text(&parse_html_document(response).await);
        assert!(text.contains("Monthly Overview for 2024-06"));
    }

    #[tokio::test]
    async fn invalid_month_is_rejected() {
        let files = TestFiles::new("dashboard_invalid_month");

        let result = get_dashboard_page(State(files.state()), query(Some("June"))).await;

        assert_eq!(result.unwrap_err(), Error::InvalidMonth("June".to_owned()));
    }

    #[tokio::test]
    async fn invalid_month_renders_bad_request_page() {
        let response = axum::response::IntoResponse::into_response(Error::InvalidMonth(
            "2024-13".to_owned(),
        ));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let files = TestFiles::new("dashboard_malformed");
        std::fs::write(
            files.expenses.as_path(),
            "Date,Category,Amount Spent,Budgeted Amount\nyesterday,Food,20,50\n",
        )
        .unwrap();

        let result = get_dashboard_page(State(files.state()), query(None)).await;

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidDate("yesterday".to_owned())
        );
    }
}
