use chrono::{DateTime, Utc};

/// Raw submission as it arrives from an inbound surface. Fields are untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEntry {
    pub first_name: String,
    pub last_name: String,
    pub date_worked: String,
    pub hours_worked: u32,
    pub task_type: String,
    pub other_detail: String,
    pub submitted_at: DateTime<Utc>,
}
