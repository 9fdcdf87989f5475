use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of the first element matching `selector`, if any.
#[track_caller]
pub(crate) fn element_text(html: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();

    html.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_owned())
}

#[track_caller]
pub(crate) fn assert_alert_message(html: &Html, want_message: &str) {
    let got_message = element_text(html, "[role=alert] p").expect("No alert message found");

    assert_eq!(want_message, got_message);
}
