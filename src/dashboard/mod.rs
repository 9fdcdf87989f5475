//! The budget dashboard page.
//!
//! Shows the budget summary, the subsidiary and sector breakdowns and the
//! transaction history, plus the admin forms when the admin role is chosen.

mod filters;
mod handlers;
mod tables;

pub use handlers::{get_dashboard_page, get_transaction_history};
