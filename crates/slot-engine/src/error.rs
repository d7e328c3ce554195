//! Error types for slot-engine operations.
//!
//! Only construction and normalization can fail. Once inputs are in engine
//! form, the engine always produces a result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid window: end {end} is not after start {start}")]
    InvalidWindow { start: String, end: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(i64),

    #[error("Request parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
