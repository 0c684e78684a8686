//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    AppState, Error,
    app_state::lock_ledger,
    dashboard::cards::{balance_card, recent_transactions_card},
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    ledger::{Ledger, RECENT_TRANSACTIONS_COUNT, Transaction, recent_transactions, total_balance},
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The user's ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the total balance and the most recent transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let ledger = lock_ledger(&state.ledger)?;
    let transactions = ledger.transactions();

    let view = dashboard_view(
        total_balance(transactions),
        &recent_transactions(transactions, RECENT_TRANSACTIONS_COUNT),
        local_offset,
    );

    Ok(view.into_response())
}

fn dashboard_view(
    total_balance: f64,
    recent_transactions: &[&Transaction],
    local_offset: UtcOffset,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl space-y-6"
            {
                h1 class="text-2xl font-bold" { "Dashboard" }

                (balance_card(total_balance))

                (recent_transactions_card(recent_transactions, local_offset))
            }
        }
    );

    base("Dashboard", &[], &content)
}
