//! The ledger: the list of transactions and the rules for changing it.

use std::fmt;

use crate::{
    Error,
    ledger::{
        core::{Timestamp, Transaction, TransactionId},
        ids::IdGenerator,
        seed::default_transactions,
        snapshot::{self, SNAPSHOT_KEY},
    },
    stores::KeyValueStore,
};

/// The user's transactions in the order they were added, together with the
/// store they are saved to.
///
/// Every change is written straight through to the store so that a reload
/// sees the same ledger.
pub struct Ledger {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
    store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl Ledger {
    /// Load the ledger saved in `store`.
    ///
    /// If nothing has been saved, or the saved snapshot cannot be decoded, the
    /// ledger starts with the sample transactions dated relative to `now`.
    /// Nothing is written to `store`.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if `store` could not be read.
    pub fn initialize(store: Box<dyn KeyValueStore>, now: Timestamp) -> Result<Self, Error> {
        let saved = store.get(SNAPSHOT_KEY)?;

        let transactions = match saved.as_deref().and_then(snapshot::decode) {
            Some(transactions) => {
                tracing::info!("Loaded {} transactions from storage", transactions.len());
                transactions
            }
            None => {
                tracing::info!("No saved ledger found, starting with the sample transactions");
                default_transactions(now)
            }
        };

        let ids = IdGenerator::after(transactions.iter().map(|transaction| transaction.id));

        Ok(Self {
            transactions,
            ids,
            store,
        })
    }

    /// The transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a new transaction and save the ledger.
    ///
    /// The description is not validated here.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] without changing the ledger if `amount`
    /// is NaN or infinite, since it could not be saved and reloaded.
    /// Returns [Error::StorageUnavailable] if the ledger could not be saved.
    /// The transaction is still kept in memory in this case.
    pub fn add(
        &mut self,
        description: String,
        amount: f64,
        date: Timestamp,
    ) -> Result<Transaction, Error> {
        self.add_at(description, amount, date, Timestamp::now())
    }

    fn add_at(
        &mut self,
        description: String,
        amount: f64,
        date: Timestamp,
        now: Timestamp,
    ) -> Result<Transaction, Error> {
        if !amount.is_finite() {
            tracing::warn!("Rejected transaction with amount {amount}");
            return Err(Error::InvalidAmount);
        }

        let transaction = Transaction {
            id: self.ids.next(now),
            description,
            amount,
            date,
        };

        self.transactions.push(transaction.clone());
        tracing::info!("Added transaction {}", transaction.id);

        self.persist()?;

        Ok(transaction)
    }

    /// Remove the transaction with `id` and save the ledger.
    ///
    /// Returns `false` without saving if no transaction has the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the ledger could not be saved.
    /// The transaction is still removed from memory in this case.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool, Error> {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            tracing::info!("Tried to remove transaction {id}, which is not in the ledger");
            return Ok(false);
        };

        self.transactions.remove(index);
        tracing::info!("Removed transaction {id}");

        self.persist()?;

        Ok(true)
    }

    /// Overwrite the saved snapshot with the current transactions.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the store rejects the write, or
    /// [Error::SnapshotEncodingError] if the transactions could not be encoded.
    pub fn persist(&mut self) -> Result<(), Error> {
        let text = snapshot::encode(&self.transactions)?;

        self.store.set(SNAPSHOT_KEY, &text).inspect_err(|error| {
            tracing::error!("Could not save the ledger: {error}");
        })
    }
}
