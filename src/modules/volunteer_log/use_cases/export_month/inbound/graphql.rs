use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::volunteer_log::use_cases::export_month::handler::{CsvExport, export_month};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlCsvExport {
    pub file_name: String,
    pub content: String,
}

impl From<CsvExport> for GqlCsvExport {
    fn from(v: CsvExport) -> Self {
        Self {
            file_name: v.file_name,
            content: v.content,
        }
    }
}

#[derive(Default)]
pub struct ExportQuery;

#[Object]
impl ExportQuery {
    async fn export_month(
        &self,
        context: &Context<'_>,
        month: Option<String>,
    ) -> GqlResult<GqlCsvExport> {
        let state = context.data_unchecked::<AppState>();
        let groups = state.monthly_groups().await;
        let export = export_month(&groups, month.as_deref(), state.csv_quoting)?;
        Ok(export.into())
    }
}
