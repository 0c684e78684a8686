//! The transaction ledger and the summaries derived from it.

mod core;
mod ids;
mod seed;
mod snapshot;
mod store;
mod views;

pub use self::core::{Timestamp, Transaction, TransactionId};
pub use seed::default_transactions;
pub use snapshot::SNAPSHOT_KEY;
pub use store::Ledger;
pub use views::{
    BalancePoint, IncomeExpenseTotals, RECENT_TRANSACTIONS_COUNT, balance_trend,
    income_expense_totals, recent_transactions, sorted_history, total_balance,
};
