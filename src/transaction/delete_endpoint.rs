//! Defines the endpoint for deleting a transaction.
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    transaction::{TransactionApiState, core::require_text, transactions_changed},
};

/// The query parameters for deleting a transaction.
///
/// htmx sends the fields of a form submitted with DELETE in the query string.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionQuery {
    #[serde(default)]
    pub transaction_id: String,
}

/// A route handler for deleting a transaction, responds with an alert.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Query(query): Query<DeleteTransactionQuery>,
) -> Response {
    let transaction_id = match require_text(query.transaction_id, "Transaction ID") {
        Ok(transaction_id) => transaction_id,
        Err(error) => {
            tracing::warn!("rejected transaction delete: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = state.api_client.delete_transaction(&transaction_id).await {
        tracing::error!("could not delete transaction {transaction_id}: {error}");
        return Error::from(error).into_alert_response();
    }

    tracing::info!("deleted transaction {transaction_id}");

    (
        transactions_changed(),
        Alert::SuccessSimple {
            message: format!("Transaction {transaction_id} deleted successfully!"),
        },
    )
        .into_response()
}
