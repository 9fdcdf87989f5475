use axum::{body::Body, http::StatusCode, response::Response};
use axum_htmx::HX_TRIGGER;

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

/// Assert that the response tells htmx to fire `event` on the page.
#[track_caller]
pub(crate) fn assert_hx_trigger(response: &Response<Body>, event: &str) {
    let trigger = response
        .headers()
        .get(HX_TRIGGER)
        .map(|value| value.to_str().expect("HX-Trigger header is not ASCII"));

    assert_eq!(trigger, Some(event), "want HX-Trigger {event:?}");
}

/// Assert that the response does not fire any htmx event.
#[track_caller]
pub(crate) fn assert_no_hx_trigger(response: &Response<Body>) {
    assert!(
        !response.headers().contains_key(HX_TRIGGER),
        "want no HX-Trigger header, got {:?}",
        response.headers().get(HX_TRIGGER)
    );
}
