//! Defines the endpoint for creating a new transaction.
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    alert::Alert,
    transaction::{
        Sector, Subsidiary, TransactionApiState, TransactionBuilder, TransactionType,
        transactions_changed,
    },
};

/// The form data for creating a transaction.
///
/// There is no remaining budget field, it is derived from the allocated
/// budget and spent amount.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionForm {
    pub transaction_id: String,
    pub date: Date,
    pub subsidiary: Subsidiary,
    pub sector: Sector,
    pub user_id: String,
    pub allocated_budget: f64,
    pub spent_amount: f64,
    pub revenue_generated: f64,
    pub transaction_type: TransactionType,
}

impl From<CreateTransactionForm> for TransactionBuilder {
    fn from(form: CreateTransactionForm) -> Self {
        Self {
            id: form.transaction_id,
            date: form.date,
            subsidiary: form.subsidiary,
            sector: form.sector,
            user_id: form.user_id,
            allocated_budget: form.allocated_budget,
            spent_amount: form.spent_amount,
            revenue_generated: form.revenue_generated,
            transaction_type: form.transaction_type,
        }
    }
}

/// A route handler for creating a new transaction, responds with an alert.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionApiState>,
    Form(form): Form<CreateTransactionForm>,
) -> Response {
    let transaction = match TransactionBuilder::from(form).finalise() {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::warn!("rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = state.api_client.create_transaction(&transaction).await {
        tracing::error!("could not create transaction {}: {error}", transaction.id);
        return Error::from(error).into_alert_response();
    }

    tracing::info!("created transaction {}", transaction.id);

    (
        transactions_changed(),
        Alert::SuccessSimple {
            message: "Transaction added successfully!".to_owned(),
        },
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        api_client::ApiClient,
        test_utils::{
            FakeBudgetApi, assert_alert_message, assert_hx_trigger, assert_no_hx_trigger,
            assert_status_ok, parse_html_fragment,
        },
        transaction::{
            Sector, Subsidiary, TransactionApiState, TransactionType, create_transaction_endpoint,
        },
    };

    use super::CreateTransactionForm;

    fn form(transaction_id: &str) -> CreateTransactionForm {
        CreateTransactionForm {
            transaction_id: transaction_id.to_owned(),
            date: date!(2025 - 03 - 01),
            subsidiary: Subsidiary::BranchC,
            sector: Sector::Marketing,
            user_id: "U7".to_owned(),
            allocated_budget: 1000.0,
            spent_amount: 400.0,
            revenue_generated: 50.0,
            transaction_type: TransactionType::Debit,
        }
    }

    fn state_for(api: &FakeBudgetApi) -> TransactionApiState {
        TransactionApiState {
            api_client: ApiClient::new(&api.base_url).unwrap(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let api = FakeBudgetApi::spawn().await;

        let response = create_transaction_endpoint(State(state_for(&api)), Form(form("T3"))).await;

        assert_status_ok(&response);
        assert_hx_trigger(&response, "transactions-changed");
        let html = parse_html_fragment(response).await;
        assert_alert_message(&html, "Transaction added successfully!");

        let created = api
            .transactions()
            .into_iter()
            .find(|transaction| transaction.id == "T3")
            .expect("transaction T3 was not created");
        assert_eq!(created.remaining_budget, 600.0);
        assert_eq!(created.subsidiary, Subsidiary::BranchC);
    }

    #[tokio::test]
    async fn sends_derived_remaining_budget() {
        let api = FakeBudgetApi::spawn().await;

        create_transaction_endpoint(State(state_for(&api)), Form(form("T3"))).await;

        let query = api.last_query();
        assert_eq!(query.len(), 10, "got {query:?}");
        assert_eq!(query["Remaining_Budget"].parse::<f64>().unwrap(), 600.0);
    }

    #[tokio::test]
    async fn shows_api_detail_on_failure() {
        let api = FakeBudgetApi::spawn().await;

        // T1 is already in the fake API.
        let response = create_transaction_endpoint(State(state_for(&api)), Form(form("T1"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_no_hx_trigger(&response);
        let html = parse_html_fragment(response).await;
        assert_alert_message(&html, "Transaction ID already exists");
    }

    #[tokio::test]
    async fn rejects_blank_id_without_calling_api() {
        let api = FakeBudgetApi::spawn().await;

        let response = create_transaction_endpoint(State(state_for(&api)), Form(form("  "))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(api.requests().is_empty(), "got {:?}", api.requests());
    }

    #[tokio::test]
    async fn rejects_negative_amounts_without_calling_api() {
        let api = FakeBudgetApi::spawn().await;
        let form = CreateTransactionForm {
            spent_amount: -1.0,
            ..form("T3")
        };

        let response = create_transaction_endpoint(State(state_for(&api)), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(api.requests().is_empty());
    }
}
