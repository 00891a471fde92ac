use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::volunteer_log::adapters::outbound::mirror_dispatch::MirrorStatus;
use crate::modules::volunteer_log::core::entry::hours_from_value;
use crate::modules::volunteer_log::use_cases::list_entries_by_month::view::EntryView;
use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use crate::modules::volunteer_log::use_cases::submit_entry::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitEntryBody {
    pub first_name: String,
    pub last_name: String,
    pub date_worked: String,
    #[serde(default)]
    pub hours_worked: serde_json::Value,
    pub task_type: String,
    #[serde(default)]
    pub other_detail: String,
}

#[derive(Serialize)]
pub struct SubmitEntryResponse {
    pub group_key: String,
    pub entry: EntryView,
    pub mirror: MirrorStatus,
}

#[derive(Serialize)]
pub struct SubmitErrorResponse {
    pub error: String,
    pub saved: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitEntry {
        first_name: body.first_name,
        last_name: body.last_name,
        date_worked: body.date_worked,
        hours_worked: hours_from_value(&body.hours_worked),
        task_type: body.task_type,
        other_detail: body.other_detail,
        submitted_at: Utc::now(),
    };

    match state.submit(command).await {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(SubmitEntryResponse {
                group_key: receipt.entry.derived_group_key(),
                entry: EntryView::from(&receipt.entry),
                mirror: receipt.mirror,
            }),
        )
            .into_response(),
        Err(error) => {
            let status = match &error {
                ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
                ApplicationError::PersistenceFull { .. } => StatusCode::INSUFFICIENT_STORAGE,
                ApplicationError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let body = match &error {
                ApplicationError::Domain(reason) => reason.to_string(),
                _ => error.to_string(),
            };
            (
                status,
                Json(SubmitErrorResponse {
                    error: body,
                    saved: false,
                }),
            )
                .into_response()
        }
    }
}
