// Shared test fixture for persisted entries.
// The JSON file uses the stored field layout, so building from it also
// exercises the lenient deserializer.

use crate::modules::volunteer_log::core::entry::Entry;
use serde_json::Value;
use std::fs;

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/entries/json/entry.json").unwrap();
        let inner: Entry = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn date_worked(mut self, v: Option<&str>) -> Self {
        self.inner.date_worked = v.map(String::from);
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

    pub fn submitted_at(mut self, v: Option<&str>) -> Self {
        self.inner.submitted_at = v.map(String::from);
        self
    }

    pub fn group_key(mut self, v: Option<&str>) -> Self {
        self.inner.group_key = v.map(String::from);
        self
    }

    pub fn month(mut self, v: Value) -> Self {
        self.inner.month = Some(v);
        self
    }

    pub fn year(mut self, v: Value) -> Self {
        self.inner.year = Some(v);
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_parses_the_stored_layout() {
        let built = EntryBuilder::default().build();
        assert_eq!(built.first_name, "A");
        assert_eq!(built.last_name, "B");
        assert_eq!(built.date_worked(), Some("2024-03-05"));
        assert_eq!(built.hours_worked, 3);
        assert_eq!(built.task_type, "Cleanup");
        assert_eq!(built.group_key.as_deref(), Some("2024-March"));
        assert_eq!(built.month, None);
        assert_eq!(built.year, None);
        assert!(built.extra.is_empty());
    }

    #[rstest]
    fn setters_override_fields() {
        let built = EntryBuilder::new()
            .first_name("C")
            .date_worked(None)
            .hours_worked(8)
            .group_key(None)
            .month(json!("May"))
            .year(json!(2022))
            .submitted_at(None)
            .build();
        assert_eq!(built.first_name, "C");
        assert_eq!(built.date_worked, None);
        assert_eq!(built.hours_worked, 8);
        assert_eq!(built.group_key, None);
        assert_eq!(built.month, Some(json!("May")));
        assert_eq!(built.year, Some(json!(2022)));
        assert_eq!(built.submitted_at, None);
    }
}
