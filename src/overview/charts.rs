//! Chart generation and rendering for the overview page.
//!
//! This module creates ECharts visualizations of the ledger:
//! - **Income vs Expense**: A pie chart of total income against total expenses
//! - **Balance Trend**: The running balance after each transaction
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, LineStyle,
        Tooltip, Trigger,
    },
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};
use time::UtcOffset;

use crate::{
    html::HeadElement,
    ledger::{BalancePoint, IncomeExpenseTotals},
};

const INCOME_COLOR: &str = "#28a745";
const EXPENSE_COLOR: &str = "#dc3545";
const BALANCE_COLOR: &str = "#007bff";

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct OverviewChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the charts.
pub(super) fn charts_view(charts: &[OverviewChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[OverviewChart]) -> HeadElement {
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

pub(super) fn income_expense_chart(totals: IncomeExpenseTotals) -> Chart {
    Chart::new()
        .title(Title::new().text("Income vs Expense").left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("1%"))
        .color::<Color>(vec![INCOME_COLOR.into(), EXPENSE_COLOR.into()])
        .series(
            Pie::new()
                .name("Income vs Expense")
                .radius("60%")
                .data(vec![(totals.income, "Income"), (totals.expense, "Expense")]),
        )
}

/// The balance after each transaction, labelled with its date in `local_offset`.
pub(super) fn balance_trend_chart(trend: &[BalancePoint], local_offset: UtcOffset) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = trend
        .iter()
        .map(|point| (date_label(point, local_offset), point.balance))
        .unzip();

    Chart::new()
        .title(Title::new().text("Balance Trend"))
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
        .series(
            Line::new()
                .name("Balance")
                .item_style(ItemStyle::new().color(BALANCE_COLOR))
                .line_style(LineStyle::new().color(BALANCE_COLOR))
                .data(values),
        )
}

fn date_label(point: &BalancePoint, local_offset: UtcOffset) -> String {
    point
        .date
        .to_local_date(local_offset)
        .map_or_else(|| "Unknown date".to_owned(), |date| date.to_string())
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return currencyFormatter.format(number);",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
