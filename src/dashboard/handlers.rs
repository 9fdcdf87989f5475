//! Dashboard HTTP handlers and view rendering.
//!
//! The page is rendered in one pass: each section awaits its own request to
//! the budget API, in page order, and renders either its table or an error
//! message. A failing section never stops the rest of the page rendering.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    alert::Alert,
    api_client::ApiClient,
    dashboard::{
        filters::{deserialize_filter, filter_select},
        tables::{summary_table, transactions_table},
    },
    endpoints,
    html::{SECTION_HEADING_STYLE, SUBSECTION_HEADING_STYLE, base},
    role::{Role, role_sidebar},
    transaction::{Sector, Subsidiary, admin_actions},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the budget API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// The role and filters chosen by the user.
///
/// Missing, empty and "All" values all mean "not chosen".
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub subsidiary: Option<Subsidiary>,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub sector: Option<Sector>,
}

/// Display the budget dashboard for the role and filters in the query string.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let role = query.role.unwrap_or_default();
    let api_client = &state.api_client;

    let summary = summary_section(api_client).await;
    let subsidiary = subsidiary_section(api_client, query.subsidiary).await;
    let sector = sector_section(api_client, query.sector).await;
    let history = transaction_history(api_client).await;

    let content = html! {
        div class="flex flex-col lg:flex-row gap-6 p-6 text-gray-900 dark:text-white"
        {
            (role_sidebar(role))

            main class="flex-1 min-w-0 space-y-8"
            {
                h1 class="text-3xl font-bold" { "Budget Dashboard" }

                (summary)
                (subsidiary)
                (sector)
                (history)

                @if role.is_admin() {
                    (admin_actions())
                }
            }
        }
    };

    base("Dashboard", &content).into_response()
}

/// Render only the transaction history section.
///
/// The section requests this endpoint itself whenever a transaction is
/// added, updated or deleted.
pub async fn get_transaction_history(State(state): State<DashboardState>) -> Response {
    transaction_history(&state.api_client).await.into_response()
}

fn load_error(message: &str) -> Markup {
    Alert::ErrorSimple {
        message: message.to_owned(),
    }
    .into_html()
}

async fn summary_section(api_client: &ApiClient) -> Markup {
    let table = match api_client.get_summary().await {
        Ok(rows) => summary_table(&rows),
        Err(error) => {
            tracing::error!("could not load the budget summary: {error}");
            load_error("Failed to load budget summary!")
        }
    };

    html! {
        section id="total-overview"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Total Budget Overview" }
            (table)
        }
    }
}

async fn subsidiary_section(api_client: &ApiClient, selected: Option<Subsidiary>) -> Markup {
    let breakdown = match selected {
        None => html! {},
        Some(subsidiary) => match api_client.get_by_subsidiary(subsidiary).await {
            Ok(rows) => html! {
                h3 class=(SUBSECTION_HEADING_STYLE) { "Subsidiary Budget Breakdown" }
                (summary_table(&rows))
            },
            Err(error) => {
                tracing::warn!("could not load the breakdown for {subsidiary}: {error}");
                load_error("Subsidiary not found!")
            }
        },
    };

    html! {
        section id="subsidiary-breakdown"
        {
            (filter_select(
                "subsidiary",
                "Filter by Subsidiary",
                &Subsidiary::ALL.map(Subsidiary::as_str),
                selected.map(Subsidiary::as_str),
            ))
            (breakdown)
        }
    }
}

async fn sector_section(api_client: &ApiClient, selected: Option<Sector>) -> Markup {
    let breakdown = match selected {
        None => html! {},
        Some(sector) => match api_client.get_by_sector(sector).await {
            Ok(rows) => html! {
                h3 class=(SUBSECTION_HEADING_STYLE) { "Sector Budget Breakdown" }
                (summary_table(&rows))
            },
            Err(error) => {
                tracing::warn!("could not load the breakdown for {sector}: {error}");
                load_error("Sector not found!")
            }
        },
    };

    html! {
        section id="sector-breakdown"
        {
            (filter_select(
                "sector",
                "Filter by Sector",
                &Sector::ALL.map(Sector::as_str),
                selected.map(Sector::as_str),
            ))
            (breakdown)
        }
    }
}

async fn transaction_history(api_client: &ApiClient) -> Markup {
    let table = match api_client.list_transactions().await {
        Ok(transactions) => transactions_table(&transactions),
        Err(error) => {
            tracing::error!("could not load transactions: {error}");
            load_error("Failed to load transactions!")
        }
    };

    html! {
        section
            id="transaction-history"
            hx-get=(endpoints::TRANSACTION_HISTORY_VIEW)
            hx-trigger="transactions-changed from:body"
            hx-swap="outerHTML"
        {
            h2 class=(SECTION_HEADING_STYLE) { "Transaction History" }
            (table)
        }
    }
}
