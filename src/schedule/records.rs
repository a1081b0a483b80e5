//! Schema-validated JSON boundary for schedule and team data.
//!
//! Raw records mirror the JSON payloads the application receives. They are
//! parsed strictly (`deny_unknown_fields`) and then converted into domain
//! types, so a shape mismatch or an invalid value is a [`DataError`] at the
//! boundary rather than a trusted cast propagating into the views.

use super::domain::{
    MemberId, Progress, ScheduleTask, ScheduleTaskParams, TaskId, TaskPriority, TaskStatus,
    TeamMember, TeamMemberParams, Trade,
};
use crate::form::rules;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while loading data at the JSON boundary.
#[derive(Debug, Error)]
pub enum DataError {
    /// The payload is not valid JSON or does not match the record schema.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record parsed but failed domain validation.
    #[error("invalid record '{name}': {reason}")]
    InvalidRecord {
        /// Name field of the offending record.
        name: String,
        /// Description of the validation failure.
        reason: String,
    },
}

impl DataError {
    fn invalid_record(name: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidRecord {
            name: name.to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Raw schedule task record as it appears in the JSON payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Priority in canonical string form.
    pub priority: String,
    /// Completion percentage, 0–100.
    pub progress: u8,
    /// Planned start date.
    pub starts_on: NaiveDate,
    /// Planned end date.
    pub ends_on: NaiveDate,
    /// Assigned member name, if any.
    #[serde(default)]
    pub assignee: Option<String>,
}

impl TryFrom<TaskRecord> for ScheduleTask {
    type Error = DataError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(record.status.as_str())
            .map_err(|e| DataError::invalid_record(&record.name, e))?;
        let priority = TaskPriority::try_from(record.priority.as_str())
            .map_err(|e| DataError::invalid_record(&record.name, e))?;
        let progress = Progress::new(record.progress)
            .map_err(|e| DataError::invalid_record(&record.name, e))?;

        Self::new(ScheduleTaskParams {
            id: TaskId::from_uuid(record.id),
            name: record.name.clone(),
            status,
            priority,
            progress,
            starts_on: record.starts_on,
            ends_on: record.ends_on,
            assignee: record.assignee,
        })
        .map_err(|e| DataError::invalid_record(&record.name, e))
    }
}

/// Raw team member record as it appears in the JSON payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberRecord {
    /// Member identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Trade in canonical string form.
    pub trade: String,
    /// Contact email, if provided.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number, if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the member is currently on the project.
    pub active: bool,
}

impl TryFrom<MemberRecord> for TeamMember {
    type Error = DataError;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        let trade = Trade::try_from(record.trade.as_str())
            .map_err(|e| DataError::invalid_record(&record.name, e))?;

        if let Some(email) = record.email.as_deref() {
            rules::validate_email(email)
                .map_err(|e| DataError::invalid_record(&record.name, e))?;
        }
        if let Some(phone) = record.phone.as_deref() {
            rules::validate_phone(phone)
                .map_err(|e| DataError::invalid_record(&record.name, e))?;
        }

        Self::new(TeamMemberParams {
            id: MemberId::from_uuid(record.id),
            name: record.name.clone(),
            trade,
            email: record.email,
            phone: record.phone,
            active: record.active,
        })
        .map_err(|e| DataError::invalid_record(&record.name, e))
    }
}

/// Loads and validates a schedule task list from a JSON array.
///
/// # Errors
///
/// Returns [`DataError::Malformed`] for JSON or schema errors, or
/// [`DataError::InvalidRecord`] for the first record failing domain
/// validation.
pub fn load_tasks(json: &str) -> Result<Vec<ScheduleTask>, DataError> {
    let records: Vec<TaskRecord> = serde_json::from_str(json)?;
    records.into_iter().map(ScheduleTask::try_from).collect()
}

/// Loads and validates a team roster from a JSON array.
///
/// # Errors
///
/// Returns [`DataError::Malformed`] for JSON or schema errors, or
/// [`DataError::InvalidRecord`] for the first record failing domain or
/// contact validation.
pub fn load_team(json: &str) -> Result<Vec<TeamMember>, DataError> {
    let records: Vec<MemberRecord> = serde_json::from_str(json)?;
    records.into_iter().map(TeamMember::try_from).collect()
}
