//! Chart generation and rendering for the ledger summaries.
//!
//! Four ECharts visualizations are built from the canonical records:
//! - **Monthly Totals**: net total per month as a line
//! - **Monthly Income** and **Monthly Expenses**: one bar per month
//! - **Expenses by Category**: a pie of expense sums
//!
//! Each chart is serialized as JSON configuration for the ECharts library and
//! rendered with a matching HTML container and initialization script.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Orient, Tooltip, Trigger,
    },
    series::{Line, Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    Error, endpoints,
    html::{HeadElement, base},
    ledger::{
        LedgerState,
        adapters::LedgerAdapters,
        records::{CategoryShare, ExpenseBarPoint, IncomeBarPoint, TimeSeriesPoint},
    },
    navigation::NavBar,
    services::Session,
};

/// A chart with its HTML container ID and ECharts configuration.
struct LedgerChart {
    /// The HTML element ID to use for the chart (kebab-case)
    id: &'static str,
    /// The ECharts configuration as a JSON string
    options: String,
}

/// Display the charts page.
///
/// # Errors
///
/// Returns an error page if any of the summaries cannot be loaded.
pub async fn get_charts_page(
    State(state): State<LedgerState>,
    session: Session,
) -> Result<Response, Error> {
    let adapters = LedgerAdapters::new(state.ledger_service.as_ref(), &session);

    let (totals, income, expenses, shares) = tokio::try_join!(
        adapters.monthly_totals(),
        adapters.monthly_income(),
        adapters.monthly_expense(),
        adapters.category_shares(),
    )?;

    let nav_bar = NavBar::new(endpoints::CHARTS_VIEW).into_html();

    if totals.is_empty() && income.is_empty() && expenses.is_empty() && shares.is_empty() {
        return Ok(no_data_view(nav_bar).into_response());
    }

    let charts = [
        LedgerChart {
            id: "monthly-totals-chart",
            options: monthly_totals_chart(&totals).to_string(),
        },
        LedgerChart {
            id: "monthly-income-chart",
            options: monthly_income_chart(&income).to_string(),
        },
        LedgerChart {
            id: "monthly-expense-chart",
            options: monthly_expense_chart(&expenses).to_string(),
        },
        LedgerChart {
            id: "category-shares-chart",
            options: category_shares_chart(&shares).to_string(),
        },
    ];

    Ok(charts_page(nav_bar, &charts).into_response())
}

fn no_data_view(nav_bar: Markup) -> Markup {
    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold" { "Nothing to chart yet" }
            p class="text-gray-500 dark:text-gray-400"
            {
                "Record some income or expenses to see monthly summaries here."
            }
        }
    );

    base("Charts", &[], &content)
}

fn charts_page(nav_bar: Markup, charts: &[LedgerChart]) -> Markup {
    let content = html!(
        (nav_bar)

        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            section
                id="charts"
                class="w-full mx-auto mb-4"
            {
                div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    @for chart in charts {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded dark:bg-gray-100"
                        {}
                    }
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Charts", &scripts, &content)
}

/// Generates JavaScript initialization code for the charts.
///
/// Each chart follows the system colour scheme and resizes with the window.
fn charts_script(charts: &[LedgerChart]) -> HeadElement {
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
        "document.addEventListener('DOMContentLoaded', function() {{\n{script_content}\n}});"
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn monthly_totals_chart(points: &[TimeSeriesPoint]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        points.iter().map(|point| (point.x.clone(), point.l)).unzip();

    monthly_chart("Monthly Totals", labels)
        .series(Line::new().name("Total").data(values))
}

fn monthly_income_chart(points: &[IncomeBarPoint]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        points.iter().map(|point| (point.x.clone(), point.v)).unzip();

    monthly_chart("Monthly Income", labels).series(bar::Bar::new().name("Income").data(values))
}

fn monthly_expense_chart(points: &[ExpenseBarPoint]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        points.iter().map(|point| (point.x.clone(), point.v1)).unzip();

    monthly_chart("Monthly Expenses", labels)
        .series(bar::Bar::new().name("Expenses").data(values))
}

fn category_shares_chart(shares: &[CategoryShare]) -> Chart {
    let data = shares
        .iter()
        .map(|share| (share.value, share.label.as_str()))
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().orient(Orient::Vertical).left("left").top(40))
        .series(Pie::new().name("Expenses").radius("60%").data(data))
}

/// The title, axes and tooltip shared by the per-month charts.
fn monthly_chart(title: &str, labels: Vec<String>) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
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
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number == null) ? \"-\" : currencyFormatter.format(number);",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
