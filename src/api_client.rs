//! A client for the remote budget API.
//!
//! Every operation is a single awaited request: there are no retries, no
//! caching and no timeout beyond the HTTP client's default.

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::transaction::{Sector, Subsidiary, Transaction, TransactionPatch};

/// A row of budget data whose columns are defined entirely by the budget API.
pub type BudgetSummaryRow = serde_json::Map<String, serde_json::Value>;

/// The errors that may occur when talking to the budget API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid budget API URL \"{0}\": {1}")]
    InvalidBaseUrl(String, String),

    /// The request could not be sent or the response could not be read.
    #[error("could not reach the budget API: {0}")]
    Transport(String),

    /// A read request was answered with a non-success status code.
    #[error("the budget API responded with {0}")]
    Status(StatusCode),

    /// A successful response body did not have the expected shape.
    #[error("could not parse the budget API response: {0}")]
    InvalidResponse(String),

    /// A write request was answered with a non-success status code.
    ///
    /// `detail` holds the `detail` string from the error body when the API
    /// supplied one.
    #[error(
        "the budget API rejected the request with {status}: {}",
        .detail.as_deref().unwrap_or("no detail given")
    )]
    Rejected {
        /// The status code of the response.
        status: StatusCode,
        /// The `detail` field of the response body, if present and a string.
        detail: Option<String>,
    },
}

impl ApiError {
    fn transport(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

/// The error body returned by the budget API for failed writes, e.g.
/// `{"detail": "Transaction not found"}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: serde_json::Value,
}

/// Get the `detail` string from an error response body.
///
/// Returns `None` if the body is not JSON, has no `detail` field, or the
/// `detail` is not a string (validation errors report a list instead).
fn parse_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => Some(detail),
        _ => None,
    }
}

/// A handle for making requests to the budget API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the budget API hosted at `base_url`.
    ///
    /// `base_url` may include a path prefix and a trailing slash, e.g.
    /// `https://example.com/budget-api/`.
    ///
    /// # Errors
    /// Returns [ApiError::InvalidBaseUrl] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: &str| ApiError::InvalidBaseUrl(base_url.to_owned(), reason.to_owned());

        let parsed = Url::parse(base_url).map_err(|error| invalid(&error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("the scheme must be http or https"));
        }

        if parsed.cannot_be_a_base() {
            return Err(invalid("the URL cannot have a path"));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    /// Build the URL for the path made of `segments`, percent-encoding each
    /// segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);

        // `new` rejects URLs that cannot be a base, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    /// Get the overall budget summary.
    pub async fn get_summary(&self) -> Result<Vec<BudgetSummaryRow>, ApiError> {
        self.get_json(self.endpoint(&["budget", "summary"])).await
    }

    /// Get the budget breakdown for a single subsidiary.
    pub async fn get_by_subsidiary(
        &self,
        subsidiary: Subsidiary,
    ) -> Result<Vec<BudgetSummaryRow>, ApiError> {
        self.get_json(self.endpoint(&["budget", "subsidiary", subsidiary.as_str()]))
            .await
    }

    /// Get the budget breakdown for a single sector.
    pub async fn get_by_sector(&self, sector: Sector) -> Result<Vec<BudgetSummaryRow>, ApiError> {
        self.get_json(self.endpoint(&["budget", "sector", sector.as_str()]))
            .await
    }

    /// Get every transaction.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(self.endpoint(&["transactions"])).await
    }

    /// Create `transaction`, sending every field, including the derived
    /// remaining budget, as query parameters.
    pub async fn create_transaction(&self, transaction: &Transaction) -> Result<(), ApiError> {
        let url = self.endpoint(&["transactions", "add"]);
        tracing::debug!("POST {url} for transaction {}", transaction.id);

        self.send_write(self.http.post(url).query(transaction)).await
    }

    /// Update the fields set in `patch` for the transaction `transaction_id`.
    pub async fn update_transaction(
        &self,
        transaction_id: &str,
        patch: &TransactionPatch,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["transactions", "update", transaction_id]);
        tracing::debug!("PUT {url} with {patch:?}");

        self.send_write(self.http.put(url).query(patch)).await
    }

    /// Delete the transaction `transaction_id`.
    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["transactions", "delete", transaction_id]);
        tracing::debug!("DELETE {url}");

        self.send_write(self.http.delete(url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .inspect_err(|error| tracing::error!("GET {url} failed: {error}"))
            .map_err(ApiError::transport)?;

        let status = response.status();

        if !status.is_success() {
            tracing::warn!("GET {url} responded with {status}");
            return Err(ApiError::Status(status));
        }

        response.json::<T>().await.map_err(|error| {
            tracing::error!("could not parse the response body for GET {url}: {error}");
            ApiError::InvalidResponse(error.to_string())
        })
    }

    async fn send_write(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::error!("write request failed: {error}"))
            .map_err(ApiError::transport)?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        // An unreadable body is treated the same as a body without a detail.
        let body = response.text().await.unwrap_or_default();
        let detail = parse_detail(&body);

        if detail.is_none() {
            tracing::warn!("the budget API responded with {status} without a detail: {body:?}");
        }

        Err(ApiError::Rejected { status, detail })
    }
}
