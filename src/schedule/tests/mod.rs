//! Unit tests for the schedule module.
//!
//! Tests are organised by concern: domain constructors, boundary record
//! parsing, and filter/ordering utilities.

mod filter_tests;

use super::domain::{
    Progress, ScheduleTask, ScheduleTaskParams, TaskId, TaskPriority, TaskStatus,
};
use chrono::NaiveDate;

/// Builds a valid task for tests, panicking only on a broken fixture.
pub fn sample_task(
    name: &str,
    status: TaskStatus,
    priority: TaskPriority,
    assignee: Option<&str>,
) -> ScheduleTask {
    ScheduleTask::new(ScheduleTaskParams {
        id: TaskId::new(),
        name: name.to_owned(),
        status,
        priority,
        progress: Progress::NONE,
        starts_on: date(2026, 3, 2),
        ends_on: date(2026, 3, 20),
        assignee: assignee.map(str::to_owned),
    })
    .expect("test task should be valid")
}

/// Builds a calendar date for tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}
