//! Error types for schedule domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing schedule domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be blank")]
    BlankTaskName,

    /// The member name is empty after trimming.
    #[error("member name must not be blank")]
    BlankMemberName,

    /// The progress percentage exceeds 100.
    #[error("progress {0} exceeds 100 percent")]
    InvalidProgress(u8),

    /// The planned end date precedes the planned start date.
    #[error("task ends on {end} before it starts on {start}")]
    EndBeforeStart {
        /// Planned start date.
        start: NaiveDate,
        /// Planned end date.
        end: NaiveDate,
    },
}

/// Error returned while parsing task statuses from records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing trades from records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown trade: {0}")]
pub struct ParseTradeError(pub String);
