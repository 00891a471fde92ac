use crate::modules::volunteer_log::core::entry::Entry;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("first name is required")]
    MissingFirstName,

    #[error("last name is required")]
    MissingLastName,

    #[error("please select a valid date")]
    MissingDate,

    #[error("invalid date format: {0}")]
    InvalidDate(String),

    #[error("unknown task type: {0}")]
    UnknownTaskType(String),
}

pub enum Decision {
    Accepted { entry: Entry },
    Rejected { reason: DecideError },
}
