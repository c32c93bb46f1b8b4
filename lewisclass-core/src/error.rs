use thiserror::Error;

/// Reasons `partition()` refuses its input.
///
/// `record` fields hold the record's position in the caller's input, before sorting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("number of classes must be at least 1")]
    NoClasses,

    #[error("number of scoring fields must be at least 1")]
    ZeroScoringFields,

    #[error("record {record} has {found} field(s), but {required} scoring field(s) are required")]
    MissingScoreField {
        record: usize,
        required: usize,
        found: usize,
    },

    #[error("record {record}: field {field} is part of the score but is not a number")]
    NonNumericScore { record: usize, field: usize },
}
