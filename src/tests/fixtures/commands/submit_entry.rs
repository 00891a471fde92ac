// Shared test fixture for the SubmitEntry command.

use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitEntryDto {
    pub first_name: String,
    pub last_name: String,
    pub date_worked: String,
    pub hours_worked: u32,
    pub task_type: String,
    pub other_detail: String,
    pub submitted_at: DateTime<Utc>,
}

pub struct SubmitEntryBuilder {
    inner: SubmitEntry,
}

impl Default for SubmitEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitEntryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_entry.json").unwrap();
        let dto: SubmitEntryDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitEntry {
                first_name: dto.first_name,
                last_name: dto.last_name,
                date_worked: dto.date_worked,
                hours_worked: dto.hours_worked,
                task_type: dto.task_type,
                other_detail: dto.other_detail,
                submitted_at: dto.submitted_at,
            },
        }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn date_worked(mut self, v: impl Into<String>) -> Self {
        self.inner.date_worked = v.into();
        self
    }

    pub fn hours_worked(mut self, v: u32) -> Self {
        self.inner.hours_worked = v;
        self
    }

    pub fn task_type(mut self, v: impl Into<String>) -> Self {
        self.inner.task_type = v.into();
        self
    }

    pub fn other_detail(mut self, v: impl Into<String>) -> Self {
        self.inner.other_detail = v.into();
        self
    }

    pub fn submitted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.submitted_at = v;
        self
    }

    pub fn build(self) -> SubmitEntry {
        self.inner
    }
}

#[cfg(test)]
mod submit_entry_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitEntryBuilder::default().build();
        assert_eq!(built.first_name, "A");
        assert_eq!(built.last_name, "B");
        assert_eq!(built.date_worked, "2024-03-05");
        assert_eq!(built.hours_worked, 3);
        assert_eq!(built.task_type, "Cleanup");
        assert_eq!(built.other_detail, "");
        assert_eq!(
            built.submitted_at,
            Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let custom = SubmitEntryBuilder::new()
            .first_name("Ada")
            .last_name("Lovelace")
            .date_worked("2025-01-01")
            .hours_worked(7)
            .task_type("Other")
            .other_detail("sorting")
            .submitted_at(at)
            .build();

        assert_eq!(custom.first_name, "Ada");
        assert_eq!(custom.last_name, "Lovelace");
        assert_eq!(custom.date_worked, "2025-01-01");
        assert_eq!(custom.hours_worked, 7);
        assert_eq!(custom.task_type, "Other");
        assert_eq!(custom.other_detail, "sorting");
        assert_eq!(custom.submitted_at, at);
    }
}
