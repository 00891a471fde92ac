use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::volunteer_log::use_cases::export_month::inbound::http as export_http;
use crate::modules::volunteer_log::use_cases::list_entries_by_month::inbound::http as list_http;
use crate::modules::volunteer_log::use_cases::submit_entry::inbound::http as submit_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/entries", post(submit_http::handle))
        .route("/entries/by-month", get(list_http::handle_by_month))
        .route("/months", get(list_http::handle_months))
        .route("/export", get(export_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
