//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    ledger::{Ledger, Timestamp},
    stores::KeyValueStore,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The user's ledger, shared between request handlers.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with the ledger saved in `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if `store` cannot be read.
    pub fn new(store: impl KeyValueStore + 'static, local_timezone: &str) -> Result<Self, Error> {
        let ledger = Ledger::initialize(Box::new(store), Timestamp::now())?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(ledger)),
        })
    }
}

/// Lock `ledger` for the duration of a request.
///
/// # Errors
/// Returns [Error::LedgerLockError] if another thread panicked while holding the lock.
pub(crate) fn lock_ledger(ledger: &Mutex<Ledger>) -> Result<MutexGuard<'_, Ledger>, Error> {
    ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)
}
