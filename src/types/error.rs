use thiserror::Error;

/// Reasons a `YYYYMMDD` date key can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("Malformed date key '{key}': expected 8 digits, got {length} characters")]
    WrongLength { key: String, length: usize },

    #[error("Malformed date key '{key}': only digits are allowed")]
    NonNumeric { key: String },

    #[error("Malformed date key '{key}': not a valid calendar date")]
    InvalidCalendarDate { key: String },
}
