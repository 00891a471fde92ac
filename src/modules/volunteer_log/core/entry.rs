use chrono::{DateTime, Datelike, Month, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::modules::volunteer_log::core::task_type::TaskType;

pub const UNKNOWN_GROUP_KEY: &str = "Unknown";

/// Placeholder an older client wrote into the date field when the form value was missing.
pub const UNDEFINED_DATE_PLACEHOLDER: &str = "undefined";

/// One recorded work session, in the persisted field layout.
///
/// Two layouts share the same slot: newer records carry a precomputed `groupKey`,
/// older ones carry separate `Month` / `Year` fields. Both deserialize into this
/// struct; keys this struct does not know about are kept in `extra` and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "First Name", default, deserialize_with = "lenient_text")]
    pub first_name: String,
    #[serde(rename = "Last Name", default, deserialize_with = "lenient_text")]
    pub last_name: String,
    #[serde(
        rename = "Day Worked",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_worked: Option<String>,
    #[serde(
        rename = "Number of Hours Worked",
        default,
        deserialize_with = "lenient_hours"
    )]
    pub hours_worked: u32,
    #[serde(rename = "Task Type", default, deserialize_with = "lenient_text")]
    pub task_type: String,
    #[serde(rename = "Other", default, deserialize_with = "lenient_text")]
    pub other_detail: String,
    #[serde(
        rename = "Timestamp",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_at: Option<String>,
    #[serde(
        rename = "groupKey",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_key: Option<String>,
    #[serde(rename = "Month", default, skip_serializing_if = "Option::is_none")]
    pub month: Option<Value>,
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Build a freshly submitted entry. The group key is derived from the date once, here.
    pub fn submitted(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_worked: NaiveDate,
        hours_worked: u32,
        task_type: TaskType,
        other_detail: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_worked: Some(date_worked.format("%Y-%m-%d").to_string()),
            hours_worked,
            task_type: task_type.to_string(),
            other_detail: other_detail.into(),
            submitted_at: Some(submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            group_key: Some(group_key_for(date_worked)),
            month: None,
            year: None,
            extra: Map::new(),
        }
    }

    pub fn date_worked(&self) -> Option<&str> {
        self.date_worked.as_deref()
    }

    pub fn work_date(&self) -> Option<NaiveDate> {
        self.date_worked().and_then(parse_work_date)
    }

    /// Grouping key: stored `groupKey`, else `<Year>-<Month>`, else `"Unknown"`.
    pub fn derived_group_key(&self) -> String {
        if let Some(key) = self.group_key.as_deref().filter(|key| !key.is_empty()) {
            return key.to_string();
        }
        match (self.stored_year(), self.stored_month()) {
            (Some(year), Some(month)) => format!("{year}-{month}"),
            _ => UNKNOWN_GROUP_KEY.to_string(),
        }
    }

    /// Month label for export: the stored `Month` field, else the month of the work date.
    pub fn month_label(&self) -> Option<String> {
        self.stored_month().or_else(|| {
            self.work_date()
                .and_then(month_name)
                .map(ToString::to_string)
        })
    }

    /// Year label for export: the stored `Year` field, else the year of the work date.
    pub fn year_label(&self) -> Option<String> {
        self.stored_year()
            .or_else(|| self.work_date().map(|date| date.year().to_string()))
    }

    pub fn description(&self) -> String {
        let is_other = self
            .task_type
            .parse::<TaskType>()
            .is_ok_and(TaskType::is_other);
        if is_other && !self.other_detail.is_empty() {
            format!("{}: {}", self.task_type, self.other_detail)
        } else {
            self.task_type.clone()
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} - {} - {} hour(s) - {}",
            self.first_name,
            self.last_name,
            self.date_worked().unwrap_or_default(),
            self.hours_worked,
            self.description()
        )
    }

    fn stored_month(&self) -> Option<String> {
        self.month.as_ref().and_then(value_text)
    }

    fn stored_year(&self) -> Option<String> {
        self.year.as_ref().and_then(value_text)
    }
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date is used.
pub fn parse_work_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    })
}

pub fn month_name(date: NaiveDate) -> Option<&'static str> {
    let number = u8::try_from(date.month()).ok()?;
    Month::try_from(number).ok().map(|month| month.name())
}

pub fn group_key_for(date: NaiveDate) -> String {
    match month_name(date) {
        Some(month) => format!("{}-{month}", date.year()),
        None => UNKNOWN_GROUP_KEY.to_string(),
    }
}

/// Leading integer of `raw`, or 0. Negative and non-numeric input both give 0.
pub fn parse_hours(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

pub fn hours_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .map(|hours| u32::try_from(hours).unwrap_or(u32::MAX))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|hours| hours.is_finite() && *hours > 0.0)
                    .map(|hours| hours.trunc().min(f64::from(u32::MAX)) as u32)
            })
            .unwrap_or(0),
        Value::String(text) => parse_hours(text),
        _ => 0,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_hours<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| hours_from_value(&value))
}
