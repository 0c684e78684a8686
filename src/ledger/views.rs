//! Read-only summaries computed from the ledger.
//!
//! None of these functions change the ledger or keep any state, so callers
//! recompute them whenever the ledger changes.

use std::cmp::Reverse;

use crate::ledger::core::{Timestamp, Transaction};

/// How many transactions the dashboard shows.
pub const RECENT_TRANSACTIONS_COUNT: usize = 5;

/// The sum of all transaction amounts.
pub fn total_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|transaction| transaction.amount).sum()
}

/// The last `count` transactions to be added, newest first.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(count).collect()
}

/// Money earned and money spent, both as non-negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IncomeExpenseTotals {
    /// The sum of all positive amounts.
    pub income: f64,
    /// The magnitude of the sum of all negative amounts.
    pub expense: f64,
}

/// Split the ledger into total income and total expenses.
///
/// Zero amounts count towards neither.
pub fn income_expense_totals(transactions: &[Transaction]) -> IncomeExpenseTotals {
    transactions
        .iter()
        .fold(IncomeExpenseTotals::default(), |mut totals, transaction| {
            if transaction.amount > 0.0 {
                totals.income += transaction.amount;
            } else if transaction.amount < 0.0 {
                totals.expense += transaction.amount.abs();
            }

            totals
        })
}

/// The running balance after a transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    /// The date of the transaction.
    pub date: Timestamp,
    /// The balance once this and every earlier transaction is counted.
    pub balance: f64,
}

/// The running balance over time, one point per transaction, oldest first.
///
/// Transactions on the same date keep the order they were added in.
pub fn balance_trend(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut by_date: Vec<&Transaction> = transactions.iter().collect();
    by_date.sort_by_key(|transaction| transaction.date);

    by_date
        .into_iter()
        .scan(0.0, |balance, transaction| {
            *balance += transaction.amount;

            Some(BalancePoint {
                date: transaction.date,
                balance: *balance,
            })
        })
        .collect()
}

/// All transactions, newest date first.
///
/// Transactions on the same date keep the order they were added in.
pub fn sorted_history(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut history: Vec<&Transaction> = transactions.iter().collect();
    history.sort_by_key(|transaction| Reverse(transaction.date));

    history
}

#[cfg(test)]
mod tests {
    use crate::ledger::{
        core::{Timestamp, Transaction},
        seed::default_transactions,
    };

    use super::{
        IncomeExpenseTotals, balance_trend, income_expense_totals, recent_transactions,
        sorted_history, total_balance,
    };

    fn transaction(id: i64, amount: f64, date: i64) -> Transaction {
        Transaction {
            id,
            description: format!("Transaction {id}"),
            amount,
            date: Timestamp::from_millis(date),
        }
    }

    fn sample() -> Vec<Transaction> {
        default_transactions(Timestamp::from_millis(1_700_000_000_000))
    }

    fn ids(transactions: &[&Transaction]) -> Vec<i64> {
        transactions.iter().map(|transaction| transaction.id).collect()
    }

    #[test]
    fn total_balance_of_sample() {
        assert_eq!(total_balance(&sample()), 1150.0);
    }

    #[test]
    fn total_balance_of_empty_ledger_is_zero() {
        assert_eq!(total_balance(&[]), 0.0);
    }

    #[test]
    fn recent_transactions_are_newest_first() {
        let transactions: Vec<_> = (1..=7).map(|id| transaction(id, 1.0, 0)).collect();

        let got = recent_transactions(&transactions, 5);

        assert_eq!(ids(&got), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn recent_transactions_follow_insertion_not_date() {
        let transactions = vec![transaction(1, 1.0, 300), transaction(2, 1.0, 100)];

        let got = recent_transactions(&transactions, 5);

        assert_eq!(ids(&got), vec![2, 1]);
    }

    #[test]
    fn recent_transactions_with_fewer_than_count() {
        let transactions = sample();

        assert_eq!(recent_transactions(&transactions, 10).len(), 5);
        assert!(recent_transactions(&transactions, 0).is_empty());
    }

    #[test]
    fn income_expense_totals_of_sample() {
        let want = IncomeExpenseTotals {
            income: 3000.0,
            expense: 1850.0,
        };

        assert_eq!(income_expense_totals(&sample()), want);
    }

    #[test]
    fn income_expense_totals_ignore_zero() {
        let transactions = vec![transaction(1, 0.0, 0)];

        assert_eq!(
            income_expense_totals(&transactions),
            IncomeExpenseTotals::default()
        );
    }

    #[test]
    fn income_minus_expense_is_balance() {
        let transactions = sample();
        let totals = income_expense_totals(&transactions);

        assert_eq!(totals.income - totals.expense, total_balance(&transactions));
    }

    #[test]
    fn balance_trend_accumulates_in_date_order() {
        let transactions = vec![
            transaction(1, 10.0, 300),
            transaction(2, 5.0, 100),
            transaction(3, -3.0, 200),
        ];

        let trend = balance_trend(&transactions);

        let balances: Vec<_> = trend.iter().map(|point| point.balance).collect();
        let dates: Vec<_> = trend.iter().map(|point| point.date.as_millis()).collect();
        assert_eq!(balances, vec![5.0, 2.0, 12.0]);
        assert_eq!(dates, vec![100, 200, 300]);
    }

    #[test]
    fn balance_trend_ends_at_total_balance() {
        let transactions = sample();

        let trend = balance_trend(&transactions);

        assert_eq!(trend.len(), transactions.len());
        assert_eq!(trend.last().map(|point| point.balance), Some(1150.0));
    }

    #[test]
    fn balance_trend_keeps_insertion_order_for_equal_dates() {
        let transactions = vec![transaction(1, 10.0, 100), transaction(2, -4.0, 100)];

        let trend = balance_trend(&transactions);

        assert_eq!(trend[0].balance, 10.0);
        assert_eq!(trend[1].balance, 6.0);
    }

    #[test]
    fn balance_trend_of_empty_ledger_is_empty() {
        assert!(balance_trend(&[]).is_empty());
    }

    #[test]
    fn sorted_history_is_newest_date_first() {
        let transactions = vec![
            transaction(1, 1.0, 100),
            transaction(2, 1.0, 300),
            transaction(3, 1.0, 200),
            transaction(4, 1.0, 300),
        ];

        let history = sorted_history(&transactions);

        assert_eq!(ids(&history), vec![2, 4, 3, 1]);
    }

    #[test]
    fn views_do_not_change_ledger() {
        let transactions = sample();
        let before = transactions.clone();

        let _ = sorted_history(&transactions);
        let _ = balance_trend(&transactions);

        assert_eq!(transactions, before);
    }
}
