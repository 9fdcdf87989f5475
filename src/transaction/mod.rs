//! Transactions and the admin actions that manage them.
//!
//! This module contains:
//! - The `Transaction` model, the builder for new transactions and the patch
//!   type for updates
//! - The admin forms for adding, updating and deleting transactions
//! - The endpoints that pass those form submissions on to the budget API

use axum::{extract::FromRef, http::HeaderName};
use axum_htmx::HX_TRIGGER;

use crate::{AppState, api_client::ApiClient};

mod core;
mod create_endpoint;
mod delete_endpoint;
mod forms;
mod update_endpoint;

pub use core::{
    Sector, Subsidiary, Transaction, TransactionBuilder, TransactionPatch, TransactionType,
    UnknownVariant,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use forms::admin_actions;
pub use update_endpoint::update_transaction_endpoint;

/// The state needed to add, update or delete a transaction.
#[derive(Debug, Clone)]
pub struct TransactionApiState {
    /// The client for the budget API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for TransactionApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// The htmx event fired after a successful write so that the transaction
/// history reloads itself.
const TRANSACTIONS_CHANGED_EVENT: &str = "transactions-changed";

/// The response header that fires [TRANSACTIONS_CHANGED_EVENT] in the browser.
fn transactions_changed() -> [(HeaderName, &'static str); 1] {
    [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)]
}
