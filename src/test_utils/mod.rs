#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_api::FakeBudgetApi;
pub(crate) use form::{
    assert_form_input, assert_form_select_options, assert_form_submit_button_with_text,
    assert_hx_endpoint, must_get_form_by_id,
};
pub(crate) use html::{
    assert_alert_message, assert_valid_html, element_text, parse_html_document,
    parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_hx_trigger, assert_no_hx_trigger, assert_status_ok};
