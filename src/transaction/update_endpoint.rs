//! Defines the endpoint for updating selected fields of a transaction.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    alert::Alert,
    transaction::{
        Sector, Subsidiary, TransactionApiState, TransactionPatch, TransactionType,
        core::require_non_negative, transactions_changed,
    },
};

/// The form data for updating a transaction.
///
/// Each `update_*` checkbox decides whether the matching `new_*` value is
/// sent. Values of unchecked fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTransactionForm {
    #[serde(default)]
    pub transaction_id: String,

    #[serde(default)]
    pub update_date: bool,
    pub new_date: Option<Date>,

    #[serde(default)]
    pub update_subsidiary: bool,
    pub new_subsidiary: Option<Subsidiary>,

    #[serde(default)]
    pub update_sector: bool,
    pub new_sector: Option<Sector>,

    #[serde(default)]
    pub update_allocated_budget: bool,
    pub new_allocated_budget: Option<f64>,

    #[serde(default)]
    pub update_spent_amount: bool,
    pub new_spent_amount: Option<f64>,

    #[serde(default)]
    pub update_revenue_generated: bool,
    pub new_revenue_generated: Option<f64>,

    #[serde(default)]
    pub update_transaction_type: bool,
    pub new_transaction_type: Option<TransactionType>,
}

/// The value of a field if its checkbox is checked.
///
/// # Errors
/// Returns [Error::MissingField] if the field is checked but has no value.
fn toggled<T>(enabled: bool, value: Option<T>, field: &'static str) -> Result<Option<T>, Error> {
    match (enabled, value) {
        (false, _) => Ok(None),
        (true, Some(value)) => Ok(Some(value)),
        (true, None) => Err(Error::MissingField(field)),
    }
}

fn toggled_amount(
    enabled: bool,
    value: Option<f64>,
    field: &'static str,
) -> Result<Option<f64>, Error> {
    toggled(enabled, value, field)?
        .map(|amount| require_non_negative(amount, field))
        .transpose()
}

impl UpdateTransactionForm {
    /// Collect the checked fields into a patch.
    fn to_patch(&self) -> Result<TransactionPatch, Error> {
        Ok(TransactionPatch {
            date: toggled(self.update_date, self.new_date, "New Date")?,
            subsidiary: toggled(
                self.update_subsidiary,
                self.new_subsidiary,
                "New Subsidiary",
            )?,
            sector: toggled(self.update_sector, self.new_sector, "New Sector")?,
            allocated_budget: toggled_amount(
                self.update_allocated_budget,
                self.new_allocated_budget,
                "New Allocated Budget",
            )?,
            spent_amount: toggled_amount(
                self.update_spent_amount,
                self.new_spent_amount,
                "New Spent Amount",
            )?,
            revenue_generated: toggled_amount(
                self.update_revenue_generated,
                self.new_revenue_generated,
                "New Revenue Generated",
            )?,
            transaction_type: toggled(
                self.update_transaction_type,
                self.new_transaction_type,
                "New Transaction Type",
            )?,
        })
    }
}

/// A route handler for updating a transaction, responds with an alert.
///
/// Submitting the form without a transaction ID does nothing and responds
/// with 204 No Content so that htmx leaves the page as it is.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Form(form): Form<UpdateTransactionForm>,
) -> Response {
    let transaction_id = form.transaction_id.trim();

    if transaction_id.is_empty() {
        tracing::debug!("ignoring transaction update without an ID");
        return StatusCode::NO_CONTENT.into_response();
    }

    let patch = match form.to_patch() {
        Ok(patch) => patch,
        Err(error) => {
            tracing::warn!("rejected update for transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = state
        .api_client
        .update_transaction(transaction_id, &patch)
        .await
    {
        tracing::error!("could not update transaction {transaction_id}: {error}");
        return Error::from(error).into_alert_response();
    }

    tracing::info!("updated transaction {transaction_id}");

    (
        transactions_changed(),
        Alert::SuccessSimple {
            message: format!("Transaction {transaction_id} updated successfully!"),
        },
    )
        .into_response()
}
