use strum::{AsRefStr, Display, EnumString, VariantNames};

/// Closed set of task categories accepted on submission.
/// Stored entries keep whatever string they were saved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
pub enum TaskType {
    Cleanup,
    Gardening,
    #[strum(serialize = "Food Service")]
    FoodService,
    #[strum(serialize = "Event Support")]
    EventSupport,
    Administrative,
    Maintenance,
    Other,
}

impl TaskType {
    pub fn is_other(self) -> bool {
        self == Self::Other
    }
}
