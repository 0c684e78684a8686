//! Overview HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_ledger,
    endpoints,
    html::{HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    ledger::{Ledger, balance_trend, income_expense_totals},
    navigation::NavBar,
    overview::charts::{
        OverviewChart, balance_trend_chart, charts_script, charts_view, income_expense_chart,
    },
    timezone::get_local_offset,
};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the overview page.
#[derive(Debug, Clone)]
pub struct OverviewState {
    /// The user's ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for OverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display charts of income against expenses and of the balance over time.
pub async fn get_overview_page(State(state): State<OverviewState>) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let charts = {
        let ledger = lock_ledger(&state.ledger)?;
        let transactions = ledger.transactions();

        if transactions.is_empty() {
            return Ok(overview_no_data_view().into_response());
        }

        [
            OverviewChart {
                id: "income-expense-chart",
                options: income_expense_chart(income_expense_totals(transactions)).to_string(),
            },
            OverviewChart {
                id: "balance-trend-chart",
                options: balance_trend_chart(&balance_trend(transactions), local_offset)
                    .to_string(),
            },
        ]
    };

    Ok(overview_view(&charts).into_response())
}

fn overview_no_data_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::OVERVIEW_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold" { "Nothing here yet..." }

            p
            {
                "Charts will show up here once you "
                a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE) { "add some transactions" }
                "."
            }
        }
    );

    base("Overview", &[], &content)
}

fn overview_view(charts: &[OverviewChart]) -> Markup {
    let nav_bar = NavBar::new(endpoints::OVERVIEW_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (charts_view(charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        charts_script(charts),
    ];

    base("Overview", &scripts, &content)
}
