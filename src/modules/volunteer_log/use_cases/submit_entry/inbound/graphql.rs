use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::volunteer_log::use_cases::list_entries_by_month::inbound::graphql::GqlEntry;
use crate::modules::volunteer_log::use_cases::list_entries_by_month::view::EntryView;
use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use crate::modules::volunteer_log::use_cases::submit_entry::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlSubmitReceipt {
    pub group_key: String,
    pub entry: GqlEntry,
    /// `synced`, `failed`, `pending` or `disabled`.
    pub mirror_status: String,
    pub mirror_detail: Option<String>,
}

/// Machine-readable `code` extension, one per failure kind.
pub fn error_code(error: &ApplicationError) -> &'static str {
    match error {
        ApplicationError::Domain(_) => "REJECTED",
        ApplicationError::PersistenceFull { .. } => "PERSISTENCE_FULL",
        ApplicationError::Persistence { .. } => "PERSISTENCE_FAILED",
    }
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", error_code(self));
            extensions.set("saved", false);
        })
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_entry(
        &self,
        context: &Context<'_>,
        first_name: String,
        last_name: String,
        date_worked: String,
        hours_worked: Option<i32>,
        task_type: String,
        other_detail: Option<String>,
    ) -> GqlResult<GqlSubmitReceipt> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitEntry {
            first_name,
            last_name,
            date_worked,
            hours_worked: hours_worked
                .and_then(|hours| u32::try_from(hours).ok())
                .unwrap_or(0),
            task_type,
            other_detail: other_detail.unwrap_or_default(),
            submitted_at: Utc::now(),
        };

        let receipt = state
            .submit(command)
            .await
            .map_err(|e| e.extend())?;

        let (mirror_status, mirror_detail) = receipt.mirror.parts();
        Ok(GqlSubmitReceipt {
            group_key: receipt.entry.derived_group_key(),
            entry: EntryView::from(&receipt.entry).into(),
            mirror_status: mirror_status.to_string(),
            mirror_detail,
        })
    }
}
