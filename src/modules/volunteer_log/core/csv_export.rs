use csv::{QuoteStyle, Terminator, WriterBuilder};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::modules::volunteer_log::core::entry::Entry;

pub const CSV_COLUMNS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Date Worked",
    "Month",
    "Year",
    "Number of Hours Worked",
    "Task Type",
    "Other",
];

/// How free-text fields are written.
///
/// `Standard` quotes a field holding a comma, quote or line break and doubles
/// embedded quotes. `Legacy` joins raw values with commas, which matches files
/// produced by the browser version byte for byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CsvQuoting {
    #[default]
    Standard,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("please select a month to download")]
    NoSelection,

    #[error("no entries for the selected month")]
    EmptyGroup,

    #[error("failed to write CSV: {0}")]
    Write(String),
}

impl CsvQuoting {
    fn quote_style(self) -> QuoteStyle {
        match self {
            Self::Standard => QuoteStyle::Necessary,
            Self::Legacy => QuoteStyle::Never,
        }
    }
}

/// Header line plus one row per entry, joined with `\n`.
pub fn to_csv(entries: &[Entry], quoting: CsvQuoting) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyGroup);
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(quoting.quote_style())
        .from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS).map_err(write_error)?;
    for entry in entries {
        writer.write_record(csv_row(entry)).map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Write(error.to_string()))?;
    let mut content = String::from_utf8(bytes).map_err(write_error)?;
    // The writer terminates every record; the export has no trailing newline.
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

fn write_error(error: impl std::fmt::Display) -> ExportError {
    ExportError::Write(error.to_string())
}

fn csv_row(entry: &Entry) -> [String; 8] {
    [
        entry.first_name.clone(),
        entry.last_name.clone(),
        entry.date_worked().unwrap_or_default().to_string(),
        entry.month_label().unwrap_or_default(),
        entry.year_label().unwrap_or_default(),
        entry.hours_worked.to_string(),
        entry.task_type.clone(),
        entry.other_detail.clone(),
    ]
}
