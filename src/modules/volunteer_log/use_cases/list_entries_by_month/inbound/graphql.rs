use async_graphql::{Context, Object, SimpleObject};

use crate::modules::volunteer_log::use_cases::list_entries_by_month::view::{
    EntryView, MonthGroupView, month_group_views,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEntry {
    pub first_name: String,
    pub last_name: String,
    pub date_worked: Option<String>,
    pub hours_worked: u32,
    pub task_type: String,
    pub other_detail: String,
    pub submitted_at: Option<String>,
    pub group_key: String,
    pub summary: String,
}

impl From<EntryView> for GqlEntry {
    fn from(v: EntryView) -> Self {
        Self {
            first_name: v.first_name,
            last_name: v.last_name,
            date_worked: v.date_worked,
            hours_worked: v.hours_worked,
            task_type: v.task_type,
            other_detail: v.other_detail,
            submitted_at: v.submitted_at,
            group_key: v.group_key,
            summary: v.summary,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMonthGroup {
    pub key: String,
    pub entries: Vec<GqlEntry>,
}

impl From<MonthGroupView> for GqlMonthGroup {
    fn from(v: MonthGroupView) -> Self {
        Self {
            key: v.key,
            entries: v.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ListQuery;

#[Object]
impl ListQuery {
    /// Month keys in first-seen order, or by calendar month when `chronological` is set.
    async fn months(&self, context: &Context<'_>, chronological: Option<bool>) -> Vec<String> {
        let state = context.data_unchecked::<AppState>();
        let groups = state.monthly_groups().await;
        if chronological.unwrap_or(false) {
            groups
                .chronological_keys()
                .into_iter()
                .map(String::from)
                .collect()
        } else {
            groups.keys().map(String::from).collect()
        }
    }

    async fn entries_by_month(&self, context: &Context<'_>) -> Vec<GqlMonthGroup> {
        let state = context.data_unchecked::<AppState>();
        let groups = state.monthly_groups().await;
        month_group_views(&groups)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
