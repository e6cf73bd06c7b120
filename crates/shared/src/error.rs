use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MAX_NUMBER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Parse,
    Range,
    Empty,
}

/// Rejection reasons for user supplied sequence text. The stored sequence is
/// never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid input '{token}': please enter numbers separated by commas")]
    Parse { token: String },
    #[error(
        "invalid value {value}: please enter positive numbers less than or equal to {max}",
        max = MAX_NUMBER
    )]
    Range { value: i64 },
    #[error("please enter at least one number")]
    Empty,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { .. } => ErrorCode::Parse,
            Self::Range { .. } => ErrorCode::Range,
            Self::Empty => ErrorCode::Empty,
        }
    }
}
