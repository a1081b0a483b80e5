//! Pure filtering and ordering utilities for schedule and team views.
//!
//! Filters narrow borrowed slices without mutating them; ordering helpers
//! return sorted reference lists so the underlying data stays untouched.
//! Overdue detection takes the clock as an argument so tests can pin the
//! current date.

use super::domain::{ScheduleTask, TaskPriority, TaskStatus, TeamMember, Trade};
use mockable::Clock;
use std::cmp::Reverse;

/// Criteria for narrowing a schedule task list.
///
/// Unset criteria match every task; set criteria must all hold.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    assignee: Option<String>,
    query: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            assignee: None,
            query: None,
        }
    }

    /// Restricts matches to the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts matches to tasks whose assignee name contains the given
    /// text, case-insensitively. Unassigned tasks never match.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Restricts matches to tasks whose name contains the given text,
    /// case-insensitively.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns `true` when the task satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &ScheduleTask) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.assignee.as_deref().is_none_or(|needle| {
                task.assignee()
                    .is_some_and(|assignee| contains_ignore_case(assignee, needle))
            })
            && self
                .query
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(task.name(), needle))
    }
}

/// Criteria for narrowing a team roster.
#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    trade: Option<Trade>,
    active_only: bool,
    query: Option<String>,
}

impl TeamFilter {
    /// Creates a filter that matches every member.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trade: None,
            active_only: false,
            query: None,
        }
    }

    /// Restricts matches to the given trade.
    #[must_use]
    pub const fn with_trade(mut self, trade: Trade) -> Self {
        self.trade = Some(trade);
        self
    }

    /// Excludes members no longer on the project.
    #[must_use]
    pub const fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Restricts matches to members whose name contains the given text,
    /// case-insensitively.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns `true` when the member satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, member: &TeamMember) -> bool {
        self.trade.is_none_or(|trade| member.trade() == trade)
            && (!self.active_only || member.is_active())
            && self
                .query
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(member.name(), needle))
    }
}

/// Returns the tasks satisfying the filter, in their original order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [ScheduleTask], filter: &TaskFilter) -> Vec<&'a ScheduleTask> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Returns the members satisfying the filter, in their original order.
#[must_use]
pub fn filter_members<'a>(
    members: &'a [TeamMember],
    filter: &TeamFilter,
) -> Vec<&'a TeamMember> {
    members.iter().filter(|member| filter.matches(member)).collect()
}

/// Returns the tasks ordered by planned start date, earliest first.
#[must_use]
pub fn sort_by_start_date(tasks: &[ScheduleTask]) -> Vec<&ScheduleTask> {
    let mut ordered: Vec<&ScheduleTask> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.starts_on());
    ordered
}

/// Returns the tasks ordered by priority, most urgent first; ties break on
/// the earlier start date.
#[must_use]
pub fn sort_by_priority(tasks: &[ScheduleTask]) -> Vec<&ScheduleTask> {
    let mut ordered: Vec<&ScheduleTask> = tasks.iter().collect();
    ordered.sort_by_key(|task| (Reverse(task.priority()), task.starts_on()));
    ordered
}

/// Returns the uncompleted tasks whose planned end date has passed.
#[must_use]
pub fn overdue_tasks<'a>(tasks: &'a [ScheduleTask], clock: &impl Clock) -> Vec<&'a ScheduleTask> {
    let today = clock.utc().date_naive();
    tasks
        .iter()
        .filter(|task| !task.is_complete() && task.ends_on() < today)
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
