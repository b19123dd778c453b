//! Error types for time conversion.
//
// User-facing failures (bad input) and internal failures (logic defects) are
// kept as separate variants so callers can report them differently.

/// Message shown whenever a time string does not look like `HH:MM`.
pub const FORMAT_HINT: &str = "Time string must be in HH:MM format (e.g., 09:30 or 23:15).";

/// Custom error type for time conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("{message}")]
    InvalidFormat { input: String, message: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: i64, min: i64, max: i64 },
    #[error("internal conversion error: {0}")]
    Internal(String),
}

impl TimeError {
    pub fn invalid_format(input: &str) -> Self {
        TimeError::InvalidFormat { input: input.to_string(), message: FORMAT_HINT.to_string() }
    }

    pub fn out_of_range(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        TimeError::OutOfRange { field, value: value.into(), min, max }
    }

    /// True for errors caused by what the user typed, false for defects in
    /// the conversion logic itself.
    pub fn is_user_error(&self) -> bool {
        matches!(self, TimeError::InvalidFormat { .. } | TimeError::OutOfRange { .. })
    }
}
