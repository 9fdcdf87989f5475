//! Defines the app level error type and its conversion to alert responses.
use axum::{http::StatusCode, response::Response};

use crate::{alert::Alert, api_client::ApiError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to the budget API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A required form field was empty or only whitespace.
    ///
    /// The string is the user-facing name of the field, e.g. "Transaction ID".
    #[error("{0} is required")]
    MissingField(&'static str),

    /// An amount was negative, infinite or not a number.
    #[error("{0} must be a number that is zero or greater")]
    NegativeAmount(&'static str),
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Api(ApiError::Rejected {
                status,
                detail: Some(detail),
            }) => (status, Alert::ErrorSimple { message: detail }),
            Error::Api(ApiError::Rejected {
                status,
                detail: None,
            }) => (
                status,
                Alert::Error {
                    message: "The budget API rejected the request".to_owned(),
                    details: format!("The budget API responded with {status}."),
                },
            ),
            Error::Api(ApiError::Transport(_)) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not reach the budget API".to_owned(),
                    details: "Check your connection and try again later.".to_owned(),
                },
            ),
            error @ (Error::MissingField(_) | Error::NegativeAmount(_)) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction".to_owned(),
                    details: format!("{error}."),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        alert.into_response_with_status(status_code)
    }
}
