//! The page listing every transaction, newest first.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error,
    app_state::lock_ledger,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_style, base, format_currency,
    },
    ledger::{Ledger, Transaction, sorted_history},
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The state needed for the history page.
#[derive(Debug, Clone)]
pub struct HistoryState {
    /// The user's ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for HistoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the table of all transactions, newest date first.
pub async fn get_history_page(State(state): State<HistoryState>) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let ledger = lock_ledger(&state.ledger)?;
    let history = sorted_history(ledger.transactions());

    Ok(history_view(&history, local_offset).into_response())
}

fn history_view(history: &[&Transaction], local_offset: UtcOffset) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl"
            {
                h1 class="text-2xl font-bold mb-4" { "History" }

                @if history.is_empty() {
                    p
                    {
                        "No transactions yet. "
                        a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE) { "Add one" }
                        "."
                    }
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                    th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                                }
                            }

                            tbody
                            {
                                @for transaction in history {
                                    (transaction_row(transaction, local_offset))
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("History", &[], &content)
}

fn transaction_row(transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let (description, full_description) = format_description(&transaction.description);
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(date) = transaction.date.to_local_date(local_offset) {
                    (date)
                }
            }

            td class=(TABLE_CELL_STYLE) title=[full_description] { (description) }

            td class={ (TABLE_CELL_STYLE) " text-right " (amount_style(transaction.amount)) }
            {
                (format_currency(transaction.amount))
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}
