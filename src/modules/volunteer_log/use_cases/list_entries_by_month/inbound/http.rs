use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::volunteer_log::use_cases::list_entries_by_month::view::month_group_views;
use crate::shell::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    #[default]
    FirstSeen,
    Chronological,
}

#[derive(Deserialize)]
pub struct ListMonthsParams {
    pub order: Option<KeyOrder>,
}

/// Every month bucket with its entries, in first-seen order.
pub async fn handle_by_month(State(state): State<AppState>) -> impl IntoResponse {
    let groups = state.monthly_groups().await;
    Json(month_group_views(&groups))
}

/// Month keys for the export selector.
pub async fn handle_months(
    State(state): State<AppState>,
    Query(params): Query<ListMonthsParams>,
) -> impl IntoResponse {
    let groups = state.monthly_groups().await;
    let keys: Vec<String> = match params.order.unwrap_or_default() {
        KeyOrder::FirstSeen => groups.keys().map(String::from).collect(),
        KeyOrder::Chronological => groups
            .chronological_keys()
            .into_iter()
            .map(String::from)
            .collect(),
    };
    Json(keys)
}
