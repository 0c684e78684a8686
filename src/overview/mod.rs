//! Overview module
//!
//! Provides the page with the income versus expense chart and the balance trend chart.

mod charts;
mod handlers;

pub use handlers::get_overview_page;
