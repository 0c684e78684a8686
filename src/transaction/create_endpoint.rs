//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    alert::Alert,
    app_state::lock_ledger,
    endpoints,
    ledger::{Ledger, Timestamp},
    timezone::get_local_offset,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The user's ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in dollars, negative for expenses.
    pub amount: f64,
    /// The date when the transaction ocurred.
    pub date: Date,
}

/// A route handler for creating a new transaction.
///
/// HTMX requests get a success alert so the form can be reused, other
/// requests are redirected to the history page.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    HxRequest(is_htmx_request): HxRequest,
    Form(form): Form<TransactionForm>,
) -> Response {
    if form.description.trim().is_empty() {
        tracing::warn!("Rejected transaction with an empty description");
        return Error::EmptyDescription.into_alert_response();
    }

    if !form.amount.is_finite() {
        tracing::warn!("Rejected transaction with amount {}", form.amount);
        return Error::InvalidAmount.into_alert_response();
    }

    let Some(local_timezone) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let date = Timestamp::start_of_day(form.date, local_timezone);

    let result = match lock_ledger(&state.ledger) {
        Ok(mut ledger) => ledger.add(form.description, form.amount, date),
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = result {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    if is_htmx_request {
        Alert::Success {
            message: "Transaction added successfully!".to_owned(),
            details: String::new(),
        }
        .into_html()
        .into_response()
    } else {
        Redirect::to(endpoints::HISTORY_VIEW).into_response()
    }
}
