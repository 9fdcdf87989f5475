//! The URIs served by the dashboard server.
//!
//! The paths of the remote budget API are built by [crate::ApiClient].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The transaction history section of the dashboard, for refreshing it in place.
pub const TRANSACTION_HISTORY_VIEW: &str = "/dashboard/transactions";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create (POST), update (PUT) and delete (DELETE) transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
