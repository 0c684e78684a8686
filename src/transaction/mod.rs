//! Transaction pages and endpoints.
//!
//! This module contains the page for adding a transaction, the page listing
//! every transaction and the endpoints for creating and deleting transactions.

mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod history_page;

pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use history_page::get_history_page;
