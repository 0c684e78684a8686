//! Dashboard module
//!
//! Provides the landing page with the total balance and the most recent transactions.

mod cards;
mod handlers;

pub use handlers::get_dashboard_page;
