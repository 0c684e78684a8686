//! Defines the core data model for the ledger.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

/// The integer type used to identify a transaction within the ledger.
pub type TransactionId = i64;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const NANOS_PER_MILLI: i128 = 1_000_000;

/// A point in time stored as milliseconds since the Unix epoch.
///
/// This is the representation used in the persisted snapshot, so converting
/// to and from JSON is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The number of milliseconds since the Unix epoch.
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The current time, truncated to the millisecond.
    pub fn now() -> Self {
        Self::from_date_time(OffsetDateTime::now_utc())
    }

    /// Convert a date time to a timestamp, discarding any sub-millisecond part.
    pub fn from_date_time(date_time: OffsetDateTime) -> Self {
        let millis = date_time.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI);

        Self(millis as i64)
    }

    /// Midnight at the start of `date` in the timezone `offset`.
    pub fn start_of_day(date: Date, offset: UtcOffset) -> Self {
        Self::from_date_time(date.midnight().assume_offset(offset))
    }

    /// The timestamp exactly `days` days (of 24 hours) before this one.
    pub const fn days_before(self, days: i64) -> Self {
        Self(self.0 - days * MILLIS_PER_DAY)
    }

    /// The calendar date of this timestamp in the timezone `offset`.
    ///
    /// Returns `None` if the timestamp lies outside the range of dates that
    /// can be represented.
    pub fn to_local_date(self, offset: UtcOffset) -> Option<Date> {
        OffsetDateTime::from_unix_timestamp_nanos(self.0 as i128 * NANOS_PER_MILLI)
            .ok()
            .map(|date_time| date_time.to_offset(offset).date())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Uniquely identifies the transaction within the ledger.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Timestamp,
}
