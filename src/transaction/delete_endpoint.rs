use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{
    AppState,
    app_state::lock_ledger,
    ledger::{Ledger, TransactionId},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The user's ledger.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with an empty body so HTMX replaces the table row with nothing.
/// Deleting a transaction that is already gone does the same, so a stale
/// row simply disappears. An alert is returned only if the ledger could not
/// be saved.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = match lock_ledger(&state.ledger) {
        Ok(mut ledger) => ledger.remove(transaction_id),
        Err(error) => return error.into_alert_response(),
    };

    match result {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(_) => Html("").into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        ledger::{Ledger, SNAPSHOT_KEY, Timestamp},
        stores::MemoryKeyValueStore,
    };

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn get_state(store: &MemoryKeyValueStore) -> DeleteTransactionState {
        let ledger = Ledger::initialize(Box::new(store.clone()), Timestamp::now())
            .expect("Could not initialize ledger");

        DeleteTransactionState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let store = MemoryKeyValueStore::new();
        let state = get_state(&store);

        let response = delete_transaction_endpoint(State(state.clone()), Path(3)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let ledger = state.ledger.lock().unwrap();
        assert!(ledger.transactions().iter().all(|t| t.id != 3));
        assert!(!store.value(SNAPSHOT_KEY).unwrap().contains("Groceries"));
    }

    #[tokio::test]
    async fn deleting_missing_transaction_does_nothing() {
        let store = MemoryKeyValueStore::new();
        let state = get_state(&store);

        let response = delete_transaction_endpoint(State(state.clone()), Path(999)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
        assert_eq!(state.ledger.lock().unwrap().transactions().len(), 5);
        assert_eq!(store.value(SNAPSHOT_KEY), None);
    }

    #[tokio::test]
    async fn deleting_twice_succeeds_both_times() {
        let store = MemoryKeyValueStore::new();
        let state = get_state(&store);

        let first = delete_transaction_endpoint(State(state.clone()), Path(1)).await;
        let second = delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(state.ledger.lock().unwrap().transactions().len(), 4);
    }

    #[tokio::test]
    async fn failed_save_shows_error_alert() {
        let store = MemoryKeyValueStore::new();
        let state = get_state(&store);
        store.set_fail_writes(true);

        let response = delete_transaction_endpoint(State(state), Path(1)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
