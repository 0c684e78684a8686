//! Issues transaction IDs that are derived from the clock but never repeat.

use crate::ledger::core::{Timestamp, TransactionId};

/// Hands out transaction IDs.
///
/// IDs follow the clock in milliseconds, but if the clock has not advanced
/// (or has gone backwards) since the last ID was issued, the next ID is one
/// more than the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    last: TransactionId,
}

impl IdGenerator {
    /// Create a generator that will only issue IDs greater than `last`.
    pub const fn new(last: TransactionId) -> Self {
        Self { last }
    }

    /// Create a generator for a ledger that already contains `existing_ids`.
    pub fn after<I>(existing_ids: I) -> Self
    where
        I: IntoIterator<Item = TransactionId>,
    {
        Self::new(existing_ids.into_iter().max().unwrap_or(0))
    }

    /// Issue the next ID for a transaction created at `now`.
    pub fn next(&mut self, now: Timestamp) -> TransactionId {
        let id = now.as_millis().max(self.last.saturating_add(1));
        self.last = id;

        id
    }
}
