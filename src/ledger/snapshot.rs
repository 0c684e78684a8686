//! Converts the ledger to and from the text saved in the key-value store.

use crate::{Error, ledger::core::Transaction};

/// The key that the ledger snapshot is saved under.
pub const SNAPSHOT_KEY: &str = "transactions";

/// Encode `transactions` as a JSON array.
///
/// # Errors
/// Returns [Error::SnapshotEncodingError] if serialization fails or an amount
/// is not finite. JSON has no NaN or infinity, so such an amount would be
/// saved as `null` and the snapshot could not be read back.
pub fn encode(transactions: &[Transaction]) -> Result<String, Error> {
    if let Some(transaction) = transactions
        .iter()
        .find(|transaction| !transaction.amount.is_finite())
    {
        tracing::error!(
            "could not encode ledger snapshot: transaction {} has amount {}",
            transaction.id,
            transaction.amount
        );
        return Err(Error::SnapshotEncodingError(format!(
            "transaction {} has a non-finite amount",
            transaction.id
        )));
    }

    serde_json::to_string(transactions).map_err(|error| {
        tracing::error!("could not encode ledger snapshot: {error}");
        Error::SnapshotEncodingError(error.to_string())
    })
}

/// Decode a snapshot produced by [encode].
///
/// Returns `None` if `text` is not a JSON array of transactions.
pub fn decode(text: &str) -> Option<Vec<Transaction>> {
    match serde_json::from_str::<Option<Vec<Transaction>>>(text) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::warn!("ignoring unreadable ledger snapshot: {error}");
            None
        }
    }
}
