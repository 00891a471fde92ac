use std::str::FromStr;

use chrono::NaiveDate;

use crate::modules::volunteer_log::core::entry::Entry;
use crate::modules::volunteer_log::core::task_type::TaskType;
use crate::modules::volunteer_log::use_cases::submit_entry::command::SubmitEntry;
use crate::modules::volunteer_log::use_cases::submit_entry::decision::{DecideError, Decision};

pub fn decide_submit(command: SubmitEntry) -> Decision {
    match build_entry(command) {
        Ok(entry) => Decision::Accepted { entry },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn build_entry(command: SubmitEntry) -> Result<Entry, DecideError> {
    let first_name = command.first_name.trim();
    if first_name.is_empty() {
        return Err(DecideError::MissingFirstName);
    }
    let last_name = command.last_name.trim();
    if last_name.is_empty() {
        return Err(DecideError::MissingLastName);
    }

    let raw_date = command.date_worked.trim();
    if raw_date.is_empty() {
        return Err(DecideError::MissingDate);
    }
    let date_worked = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| DecideError::InvalidDate(raw_date.to_string()))?;

    let task_type = TaskType::from_str(command.task_type.trim())
        .map_err(|_| DecideError::UnknownTaskType(command.task_type.clone()))?;

    Ok(Entry::submitted(
        first_name,
        last_name,
        date_worked,
        command.hours_worked,
        task_type,
        command.other_detail.trim(),
        command.submitted_at,
    ))
}

#[cfg(test)]
mod submit_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::submit_entry::SubmitEntryBuilder;
    use rstest::rstest;

    fn accepted(command: SubmitEntry) -> Entry {
        match decide_submit(command) {
            Decision::Accepted { entry } => entry,
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    fn rejected(command: SubmitEntry) -> DecideError {
        match decide_submit(command) {
            Decision::Accepted { .. } => panic!("expected Rejected"),
            Decision::Rejected { reason } => reason,
        }
    }

    #[rstest]
    fn it_should_accept_a_valid_submission() {
        let entry = accepted(SubmitEntryBuilder::new().build());
        assert_eq!(entry.first_name, "A");
        assert_eq!(entry.last_name, "B");
        assert_eq!(entry.date_worked(), Some("2024-03-05"));
        assert_eq!(entry.hours_worked, 3);
        assert_eq!(entry.task_type, "Cleanup");
        assert_eq!(entry.group_key.as_deref(), Some("2024-March"));
        assert_eq!(
            entry.submitted_at.as_deref(),
            Some("2024-03-05T18:00:00.000Z")
        );
    }

    #[rstest]
    fn it_should_trim_text_fields() {
        let entry = accepted(
            SubmitEntryBuilder::new()
                .first_name("  Ada ")
                .last_name(" Lovelace  ")
                .task_type("Other")
                .other_detail("  sorting  ")
                .build(),
        );
        assert_eq!(entry.first_name, "Ada");
        assert_eq!(entry.last_name, "Lovelace");
        assert_eq!(entry.other_detail, "sorting");
        assert_eq!(entry.description(), "Other: sorting");
    }

    #[rstest]
    #[case(SubmitEntryBuilder::new().first_name("   ").build(), DecideError::MissingFirstName)]
    #[case(SubmitEntryBuilder::new().last_name("").build(), DecideError::MissingLastName)]
    #[case(SubmitEntryBuilder::new().date_worked("").build(), DecideError::MissingDate)]
    #[case(
        SubmitEntryBuilder::new().date_worked("undefined").build(),
        DecideError::InvalidDate("undefined".into())
    )]
    #[case(
        SubmitEntryBuilder::new().date_worked("2024-02-30").build(),
        DecideError::InvalidDate("2024-02-30".into())
    )]
    #[case(
        SubmitEntryBuilder::new().task_type("Juggling").build(),
        DecideError::UnknownTaskType("Juggling".into())
    )]
    fn it_should_reject_invalid_submissions(
        #[case] command: SubmitEntry,
        #[case] expected: DecideError,
    ) {
        assert_eq!(rejected(command), expected);
    }

    #[rstest]
    fn it_should_derive_the_group_key_from_the_date_not_the_submission_time() {
        let entry = accepted(SubmitEntryBuilder::new().date_worked("2023-12-31").build());
        assert_eq!(entry.group_key.as_deref(), Some("2023-December"));
    }
}
