//! The page behind `/error` for failures the dashboard cannot recover from.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_internal_server_error_page() -> Response {
    let page = error_view(
        "Internal Server Error",
        "500",
        "The dashboard could not finish your request.",
        "Try again later. If the budget API is down, the server logs will say so.",
    );

    (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
}
