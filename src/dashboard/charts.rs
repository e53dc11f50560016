//! The chart of spending by category.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{YearMonth, dashboard::aggregation::ExpenseSummary, html::HeadElement};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[380px] rounded dark:bg-gray-100"
                {}
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A bar chart of the amount spent in each category in `month`.
pub(super) fn spending_by_category_chart(month: YearMonth, summary: &ExpenseSummary) -> Chart {
    let labels: Vec<String> = summary.spent_by_category.keys().cloned().collect();
    let values: Vec<f64> = summary.spent_by_category.values().copied().collect();

    Chart::new()
        .title(
            Title::new()
                .text("Spending by Category")
                .subtext(month.to_string()),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Amount Spent").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::dashboard::aggregation::ExpenseSummary;

    use super::{DashboardChart, charts_script, spending_by_category_chart};

    #[test]
    fn chart_lists_categories_in_order() {
        let summary = ExpenseSummary {
            spent_by_category: BTreeMap::from([
                ("Transport".to_owned(), 4.0),
                ("Food".to_owned(), 20.0),
            ]),
            total_spent: 24.0,
            total_budgeted: 70.0,
            remaining_budget: 776.0,
            remaining_savings: 776.0,
        };

        let options = spending_by_category_chart("2024-06".parse().unwrap(), &summary).to_string();

        let food = options.find("\"Food\"").expect("Food label missing");
        let transport = options.find("\"Transport\"").expect("Transport label missing");
        assert!(food < transport);
        assert!(options.contains("2024-06"));
    }

    #[test]
    fn script_initializes_each_chart() {
        let charts = [DashboardChart {
            id: "spending-chart",
            options: "{}".to_owned(),
        }];

        let script = match charts_script(&charts) {
            crate::html::HeadElement::ScriptSource(script) => script.0,
            _ => panic!("want a script source"),
        };

        assert!(script.contains("document.getElementById(\"spending-chart\")"));
    }
}
