//! The ledger a new user starts with.

use crate::ledger::core::{Timestamp, Transaction};

/// The sample transactions used when nothing has been saved yet.
///
/// Dates are relative to `now` so the sample data always looks recent.
pub fn default_transactions(now: Timestamp) -> Vec<Transaction> {
    [
        (1, "Salary", 3000.0, 7),
        (2, "Rent", -1000.0, 5),
        (3, "Groceries", -200.0, 3),
        (4, "Utilities", -150.0, 2),
        (5, "Savings", -500.0, 1),
    ]
    .into_iter()
    .map(|(id, description, amount, days_ago)| Transaction {
        id,
        description: description.to_owned(),
        amount,
        date: now.days_before(days_ago),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use crate::ledger::core::Timestamp;

    use super::default_transactions;

    #[test]
    fn has_five_transactions_in_date_order() {
        let now = Timestamp::from_millis(1_700_000_000_000);

        let transactions = default_transactions(now);

        let ids: Vec<_> = transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(transactions.windows(2).all(|w| w[0].date < w[1].date));
        assert!(transactions.iter().all(|t| t.date < now));
    }

    #[test]
    fn oldest_is_a_week_ago() {
        let now = Timestamp::from_millis(1_700_000_000_000);

        let transactions = default_transactions(now);

        assert_eq!(transactions[0].description, "Salary");
        assert_eq!(transactions[0].date, now.days_before(7));
        assert_eq!(transactions[4].date, now.days_before(1));
    }
}
