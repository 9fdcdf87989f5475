//! Implements a struct that holds the state of the dashboard server.

use crate::{Error, api_client::ApiClient};

/// The state of the dashboard server.
///
/// The state is built once at start-up and never changes, each handler gets
/// its own clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the remote budget API.
    pub api_client: ApiClient,
}

impl AppState {
    /// Create a new [AppState] for the budget API hosted at `api_url`.
    ///
    /// # Errors
    /// Returns an error if `api_url` is not an absolute http(s) URL.
    pub fn new(api_url: &str) -> Result<Self, Error> {
        let api_client = ApiClient::new(api_url)?;

        Ok(Self { api_client })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, api_client::ApiError};

    #[test]
    fn new_accepts_url_with_path_prefix() {
        let result = AppState::new("https://example.com/budget/");

        assert!(result.is_ok(), "got {result:?}");
    }

    #[test]
    fn new_rejects_relative_url() {
        let result = AppState::new("/budget");

        assert!(
            matches!(result, Err(Error::Api(ApiError::InvalidBaseUrl(_, _)))),
            "got {result:?}"
        );
    }
}
