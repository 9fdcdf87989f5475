//! An in-process stand-in for the remote budget API.
//!
//! The fake serves the same routes as the real API from a local port and
//! records every request it receives so tests can check exactly what was
//! sent.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use time::macros::date;
use tokio::net::TcpListener;

use crate::transaction::{Sector, Subsidiary, Transaction, TransactionType};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: Method,
    path: String,
    query: BTreeMap<String, String>,
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

pub(crate) struct FakeBudgetApi {
    pub base_url: String,
    state: FakeState,
}

impl FakeBudgetApi {
    /// Start a fake API with a couple of summary rows and two transactions.
    pub async fn spawn() -> Self {
        let state = FakeState {
            requests: Arc::default(),
            transactions: Arc::new(Mutex::new(seed_transactions())),
        };

        let router = Router::new()
            .route("/budget/summary", get(get_summary))
            .route("/budget/subsidiary/{name}", get(get_by_subsidiary))
            .route("/budget/sector/{name}", get(get_by_sector))
            .route("/transactions", get(list_transactions))
            .route("/transactions/add", post(add_transaction))
            .route("/transactions/update/{id}", put(update_transaction))
            .route("/transactions/delete/{id}", delete(delete_transaction));

        Self::serve(router, state).await
    }

    /// Start a fake API that answers every request with a plain text 500.
    pub async fn spawn_failing() -> Self {
        let state = FakeState {
            requests: Arc::default(),
            transactions: Arc::default(),
        };

        let router = Router::new().fallback(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        });

        Self::serve(router, state).await
    }

    /// Start a fake API that lists `rows` as its transactions, whether or not
    /// they are valid transactions.
    pub async fn spawn_with_transaction_rows(rows: Vec<Value>) -> Self {
        let state = FakeState {
            requests: Arc::default(),
            transactions: Arc::default(),
        };

        let router = Router::new()
            .route("/budget/summary", get(get_summary))
            .route(
                "/transactions",
                get(move || {
                    let rows = rows.clone();
                    async move { Json(rows) }
                }),
            );

        Self::serve(router, state).await
    }

    async fn serve(router: Router<FakeState>, state: FakeState) -> Self {
        let router = router
            .layer(middleware::from_fn_with_state(state.clone(), record_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind fake budget API");
        let address = listener
            .local_addr()
            .expect("Could not get fake budget API address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake budget API stopped unexpectedly");
        });

        Self {
            base_url: format!("http://{address}/"),
            state,
        }
    }

    /// The method and raw (percent-encoded) path of every request received so far.
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| (request.method.clone(), request.path.clone()))
            .collect()
    }

    /// The decoded query parameters of the most recent request.
    #[track_caller]
    pub fn last_query(&self) -> BTreeMap<String, String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .last()
            .expect("The fake budget API has not received any requests")
            .query
            .clone()
    }

    /// The transactions currently held by the fake.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.transactions.lock().unwrap().clone()
    }
}

async fn record_request(State(state): State<FakeState>, request: Request, next: Next) -> Response {
    let query = request
        .uri()
        .query()
        .map(|query| {
            serde_urlencoded::from_str::<Vec<(String, String)>>(query)
                .expect("Could not parse query string")
        })
        .unwrap_or_default()
        .into_iter()
        .collect();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: request.method().clone(),
        path: request.uri().path().to_owned(),
        query,
    });

    next.run(request).await
}

fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "T1".to_owned(),
            date: date!(2025 - 01 - 15),
            subsidiary: Subsidiary::BranchA,
            sector: Sector::ResearchAndDevelopment,
            user_id: "U1".to_owned(),
            allocated_budget: 1000.0,
            spent_amount: 400.0,
            remaining_budget: 600.0,
            revenue_generated: 150.0,
            transaction_type: TransactionType::Debit,
        },
        Transaction {
            id: "T2".to_owned(),
            date: date!(2025 - 02 - 03),
            subsidiary: Subsidiary::BranchB,
            sector: Sector::InformationTechnology,
            user_id: "U2".to_owned(),
            allocated_budget: 2500.5,
            spent_amount: 0.0,
            remaining_budget: 2500.5,
            revenue_generated: 0.0,
            transaction_type: TransactionType::Credit,
        },
    ]
}

fn summary_rows() -> Vec<Value> {
    vec![
        json!({
            "Subsidiary": "Branch A",
            "Total_Allocated": 1000.0,
            "Total_Spent": 400.0,
            "Total_Remaining": 600.0,
        }),
        json!({
            "Subsidiary": "Branch B",
            "Total_Allocated": 2500.5,
            "Total_Spent": 0.0,
            "Total_Remaining": 2500.5,
        }),
    ]
}

fn sector_rows() -> Vec<Value> {
    vec![
        json!({ "Sector": "R&D", "Total_Allocated": 1000.0, "Total_Spent": 400.0 }),
        json!({ "Sector": "IT", "Total_Allocated": 2500.5, "Total_Spent": 0.0 }),
    ]
}

fn not_found(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
}

fn rows_matching(rows: Vec<Value>, column: &str, name: &str) -> Vec<Value> {
    rows.into_iter()
        .filter(|row| row[column] == name)
        .collect()
}

async fn get_summary() -> Json<Vec<Value>> {
    Json(summary_rows())
}

async fn get_by_subsidiary(Path(name): Path<String>) -> Response {
    let rows = rows_matching(summary_rows(), "Subsidiary", &name);

    if rows.is_empty() {
        return not_found("Subsidiary not found");
    }

    Json(rows).into_response()
}

async fn get_by_sector(Path(name): Path<String>) -> Response {
    let rows = rows_matching(sector_rows(), "Sector", &name);

    if rows.is_empty() {
        return not_found("Sector not found");
    }

    Json(rows).into_response()
}

async fn list_transactions(State(state): State<FakeState>) -> Json<Vec<Transaction>> {
    Json(state.transactions.lock().unwrap().clone())
}

async fn add_transaction(
    State(state): State<FakeState>,
    Query(transaction): Query<Transaction>,
) -> Response {
    let mut transactions = state.transactions.lock().unwrap();

    if transactions.iter().any(|existing| existing.id == transaction.id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Transaction ID already exists" })),
        )
            .into_response();
    }

    transactions.push(transaction);
    Json(json!({ "message": "Transaction added successfully" })).into_response()
}

async fn update_transaction(State(state): State<FakeState>, Path(id): Path<String>) -> Response {
    let transactions = state.transactions.lock().unwrap();

    if !transactions.iter().any(|transaction| transaction.id == id) {
        return not_found("Transaction not found");
    }

    Json(json!({ "message": "Transaction updated successfully" })).into_response()
}

async fn delete_transaction(State(state): State<FakeState>, Path(id): Path<String>) -> Response {
    let mut transactions = state.transactions.lock().unwrap();
    let count_before = transactions.len();
    transactions.retain(|transaction| transaction.id != id);

    if transactions.len() == count_before {
        return not_found("Transaction not found");
    }

    Json(json!({ "message": "Transaction deleted successfully" })).into_response()
}
