use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::volunteer_log::core::csv_export::ExportError;
use crate::modules::volunteer_log::use_cases::export_month::handler::export_month;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    pub month: Option<String>,
}

#[derive(Serialize)]
pub struct ExportErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let groups = state.monthly_groups().await;
    match export_month(&groups, params.month.as_deref(), state.csv_quoting) {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.file_name),
                ),
            ],
            export.content,
        )
            .into_response(),
        Err(error) => {
            let status = match error {
                ExportError::NoSelection => StatusCode::BAD_REQUEST,
                ExportError::EmptyGroup => StatusCode::NOT_FOUND,
                ExportError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ExportErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}
