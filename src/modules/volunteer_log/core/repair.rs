use serde_json::Value;
use thiserror::Error;

use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::modules::volunteer_log::core::entry::{Entry, UNDEFINED_DATE_PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record could not be read: {0}")]
    Unreadable(String),

    #[error("work date is missing")]
    MissingDate,

    #[error("work date is blank")]
    BlankDate,

    #[error("work date is the \"undefined\" placeholder")]
    UndefinedDate,
}

/// A stored record removed by the load-time repair pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry #{position} dropped: {reason}")]
pub struct InvalidEntry {
    pub position: usize,
    pub reason: InvalidReason,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepairOutcome {
    pub collection: EntryCollection,
    pub dropped: Vec<InvalidEntry>,
}

/// Decode the stored slot into raw records. JSON `null` counts as an empty slot.
pub fn decode_slot(contents: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str::<Option<Vec<Value>>>(contents).map(Option::unwrap_or_default)
}

pub fn check_entry(entry: &Entry) -> Result<(), InvalidReason> {
    match entry.date_worked() {
        None => Err(InvalidReason::MissingDate),
        Some("") => Err(InvalidReason::BlankDate),
        Some(UNDEFINED_DATE_PLACEHOLDER) => Err(InvalidReason::UndefinedDate),
        Some(_) => Ok(()),
    }
}

/// Keep the records that read as an entry with a usable work date, in stored order.
pub fn repair(records: Vec<Value>) -> RepairOutcome {
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = Vec::new();

    for (position, record) in records.into_iter().enumerate() {
        match read_record(record) {
            Ok(entry) => kept.push(entry),
            Err(reason) => dropped.push(InvalidEntry { position, reason }),
        }
    }

    RepairOutcome {
        collection: EntryCollection::from(kept),
        dropped,
    }
}

fn read_record(record: Value) -> Result<Entry, InvalidReason> {
    if !record.is_object() {
        return Err(InvalidReason::NotAnObject);
    }
    let entry: Entry = serde_json::from_value(record)
        .map_err(|error| InvalidReason::Unreadable(error.to_string()))?;
    check_entry(&entry)?;
    Ok(entry)
}
