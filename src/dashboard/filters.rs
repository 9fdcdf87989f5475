//! The subsidiary and sector filters shown above the breakdown tables.

use std::{fmt::Display, str::FromStr};

use maud::{Markup, html};
use serde::{Deserialize, Deserializer, de};

use crate::{
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The option that turns a filter off.
pub(super) const ALL_OPTION: &str = "All";

/// Deserialize an optional query parameter, treating a missing value, an
/// empty string and [ALL_OPTION] as "no filter".
pub(crate) fn deserialize_filter<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") | Some(ALL_OPTION) => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// A select over "All" plus `options` that reloads the dashboard on change.
///
/// The select shares the `dashboard-control` class with the role picker so
/// that every control is sent with each reload.
pub(super) fn filter_select(
    name: &str,
    label: &str,
    options: &[&str],
    selected: Option<&str>,
) -> Markup {
    html! {
        div class="max-w-xs mb-4"
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select
                id=(name)
                name=(name)
                class={(FORM_TEXT_INPUT_STYLE) " dashboard-control"}
                hx-get=(endpoints::DASHBOARD_VIEW)
                hx-trigger="change"
                hx-include=".dashboard-control"
                hx-target="body"
                hx-push-url="true"
            {
                option value=(ALL_OPTION) selected[selected.is_none()] { (ALL_OPTION) }

                @for option_name in options {
                    option value=(option_name) selected[selected == Some(*option_name)] { (option_name) }
                }
            }
        }
    }
}
