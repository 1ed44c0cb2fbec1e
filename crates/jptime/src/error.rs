//! Error types for jptime operations.
//!
//! Only input boundaries fail: building or parsing an instant, or asking for a
//! year chrono cannot represent. Calendar lookups themselves never fail; they
//! report "no match" through `Option` or an empty string.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JpTimeError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),
}

pub type Result<T> = std::result::Result<T, JpTimeError>;
