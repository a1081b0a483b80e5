//! Schedule task aggregate and related scalar types.

use super::{ParseTaskPriorityError, ParseTaskStatusError, ScheduleDomainError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a schedule task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not begun.
    NotStarted,
    /// Work is underway.
    InProgress,
    /// Work is underway but behind its planned dates.
    Delayed,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical record representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Delayed => "delayed",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "delayed" => Ok(Self::Delayed),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Scheduling priority of a task.
///
/// Variants are ordered from least to most urgent, so the derived `Ord`
/// sorts `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can slip without affecting the critical path.
    Low,
    /// Default priority.
    Medium,
    /// Slippage affects dependent tasks.
    High,
    /// On the critical path.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical record representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Completion percentage of a task, validated to the 0–100 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Progress of a finished task.
    pub const COMPLETE: Self = Self(100);

    /// Progress of an unstarted task.
    pub const NONE: Self = Self(0);

    /// Creates a validated progress percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::InvalidProgress`] when the value
    /// exceeds 100.
    pub const fn new(percent: u8) -> Result<Self, ScheduleDomainError> {
        if percent > 100 {
            return Err(ScheduleDomainError::InvalidProgress(percent));
        }
        Ok(Self(percent))
    }

    /// Returns the underlying percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

/// Parameter object for constructing a schedule task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTaskParams {
    /// Task identifier.
    pub id: TaskId,
    /// Display name of the task.
    pub name: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Scheduling priority.
    pub priority: TaskPriority,
    /// Completion percentage.
    pub progress: Progress,
    /// Planned start date.
    pub starts_on: NaiveDate,
    /// Planned end date.
    pub ends_on: NaiveDate,
    /// Name of the assigned member, if any.
    pub assignee: Option<String>,
}

/// A single entry on the project schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTask {
    id: TaskId,
    name: String,
    status: TaskStatus,
    priority: TaskPriority,
    progress: Progress,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    assignee: Option<String>,
}

impl ScheduleTask {
    /// Creates a validated schedule task.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::BlankTaskName`] if the name is empty
    /// after trimming, or [`ScheduleDomainError::EndBeforeStart`] if the
    /// planned end date precedes the start date.
    pub fn new(params: ScheduleTaskParams) -> Result<Self, ScheduleDomainError> {
        if params.name.trim().is_empty() {
            return Err(ScheduleDomainError::BlankTaskName);
        }
        if params.ends_on < params.starts_on {
            return Err(ScheduleDomainError::EndBeforeStart {
                start: params.starts_on,
                end: params.ends_on,
            });
        }

        Ok(Self {
            id: params.id,
            name: params.name,
            status: params.status,
            priority: params.priority,
            progress: params.progress,
            starts_on: params.starts_on,
            ends_on: params.ends_on,
            assignee: params.assignee,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the planned start date.
    #[must_use]
    pub const fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    /// Returns the planned end date.
    #[must_use]
    pub const fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }

    /// Returns the assigned member name, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns `true` when the task status is [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }
}
