use serde::{Deserialize, Serialize};

use crate::modules::volunteer_log::core::entry::Entry;
use crate::modules::volunteer_log::core::grouping::{MonthGroup, MonthlyGroups};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroupView {
    pub key: String,
    pub entries: Vec<EntryView>,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        Self {
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            date_worked: entry.date_worked.clone(),
            hours_worked: entry.hours_worked,
            task_type: entry.task_type.clone(),
            other_detail: entry.other_detail.clone(),
            submitted_at: entry.submitted_at.clone(),
            group_key: entry.derived_group_key(),
            summary: entry.summary(),
        }
    }
}

impl From<&MonthGroup> for MonthGroupView {
    fn from(group: &MonthGroup) -> Self {
        Self {
            key: group.key.clone(),
            entries: group.entries.iter().map(EntryView::from).collect(),
        }
    }
}

pub fn month_group_views(groups: &MonthlyGroups) -> Vec<MonthGroupView> {
    groups.iter().map(MonthGroupView::from).collect()
}
