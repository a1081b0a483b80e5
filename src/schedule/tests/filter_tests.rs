//! Unit tests for filter and ordering utilities.

use super::{date, sample_task};
use crate::schedule::domain::{
    MemberId, Progress, ScheduleTask, ScheduleTaskParams, TaskId, TaskPriority, TaskStatus,
    TeamMember, TeamMemberParams, Trade,
};
use crate::schedule::filters::{
    TaskFilter, TeamFilter, filter_members, filter_tasks, overdue_tasks, sort_by_priority,
    sort_by_start_date,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

/// Clock pinned to a fixture instant, so overdue checks are deterministic.
struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn clock() -> FixtureClock {
    let utc_now = Utc
        .with_ymd_and_hms(2026, 4, 15, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    FixtureClock { utc_now }
}

fn dated_task(name: &str, status: TaskStatus, ends_on: NaiveDate) -> ScheduleTask {
    ScheduleTask::new(ScheduleTaskParams {
        id: TaskId::new(),
        name: name.to_owned(),
        status,
        priority: TaskPriority::Medium,
        progress: Progress::NONE,
        starts_on: date(2026, 3, 1),
        ends_on,
        assignee: None,
    })
    .expect("test task should be valid")
}

fn sample_member(name: &str, trade: Trade, active: bool) -> TeamMember {
    TeamMember::new(TeamMemberParams {
        id: MemberId::new(),
        name: name.to_owned(),
        trade,
        email: None,
        phone: None,
        active,
    })
    .expect("test member should be valid")
}

// ============================================================================
// Task filtering
// ============================================================================

#[rstest]
fn default_filter_matches_every_task() {
    let tasks = [
        sample_task("Excavation", TaskStatus::Completed, TaskPriority::High, None),
        sample_task("Framing", TaskStatus::InProgress, TaskPriority::Low, None),
    ];
    assert_eq!(filter_tasks(&tasks, &TaskFilter::new()).len(), 2);
}

#[rstest]
fn status_filter_narrows_to_matching_tasks() {
    let tasks = [
        sample_task("Excavation", TaskStatus::Completed, TaskPriority::High, None),
        sample_task("Framing", TaskStatus::InProgress, TaskPriority::Low, None),
        sample_task("Roofing", TaskStatus::InProgress, TaskPriority::High, None),
    ];
    let filter = TaskFilter::new().with_status(TaskStatus::InProgress);
    let matched = filter_tasks(&tasks, &filter);
    let names: Vec<&str> = matched.iter().map(|task| task.name()).collect();
    assert_eq!(names, ["Framing", "Roofing"]);
}

#[rstest]
fn combined_criteria_must_all_hold() {
    let tasks = [
        sample_task("Framing", TaskStatus::InProgress, TaskPriority::Low, None),
        sample_task("Roofing", TaskStatus::InProgress, TaskPriority::High, None),
    ];
    let filter = TaskFilter::new()
        .with_status(TaskStatus::InProgress)
        .with_priority(TaskPriority::High);
    let matched = filter_tasks(&tasks, &filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched.first().map(|task| task.name()), Some("Roofing"));
}

#[rstest]
fn query_filter_is_case_insensitive() {
    let tasks = [
        sample_task("Pour Footings", TaskStatus::NotStarted, TaskPriority::Low, None),
        sample_task("Framing", TaskStatus::NotStarted, TaskPriority::Low, None),
    ];
    let filter = TaskFilter::new().with_query("footings");
    assert_eq!(filter_tasks(&tasks, &filter).len(), 1);
}

#[rstest]
fn assignee_filter_skips_unassigned_tasks() {
    let tasks = [
        sample_task("Wiring", TaskStatus::InProgress, TaskPriority::Low, Some("Dana Whitfield")),
        sample_task("Drywall", TaskStatus::InProgress, TaskPriority::Low, None),
    ];
    let filter = TaskFilter::new().with_assignee("dana");
    let matched = filter_tasks(&tasks, &filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched.first().map(|task| task.name()), Some("Wiring"));
}

// ============================================================================
// Team filtering
// ============================================================================

#[rstest]
fn team_filter_narrows_by_trade_and_activity() {
    let members = [
        sample_member("Dana Whitfield", Trade::Electrical, true),
        sample_member("Marcus Boyd", Trade::Electrical, false),
        sample_member("Priya Raman", Trade::Plumbing, true),
    ];
    let filter = TeamFilter::new().with_trade(Trade::Electrical).active_only();
    let matched = filter_members(&members, &filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched.first().map(|member| member.name()), Some("Dana Whitfield"));
}

#[rstest]
fn team_query_matches_partial_names() {
    let members = [
        sample_member("Dana Whitfield", Trade::Electrical, true),
        sample_member("Priya Raman", Trade::Plumbing, true),
    ];
    let filter = TeamFilter::new().with_query("whit");
    assert_eq!(filter_members(&members, &filter).len(), 1);
}

// ============================================================================
// Ordering
// ============================================================================

#[rstest]
fn sort_by_start_date_orders_earliest_first() {
    let early = ScheduleTask::new(ScheduleTaskParams {
        id: TaskId::new(),
        name: "Site clearing".to_owned(),
        status: TaskStatus::Completed,
        priority: TaskPriority::Low,
        progress: Progress::COMPLETE,
        starts_on: date(2026, 1, 5),
        ends_on: date(2026, 1, 16),
        assignee: None,
    })
    .expect("test task should be valid");
    let late = sample_task("Framing", TaskStatus::NotStarted, TaskPriority::Low, None);

    let tasks = [late, early];
    let ordered = sort_by_start_date(&tasks);
    let names: Vec<&str> = ordered.iter().map(|task| task.name()).collect();
    assert_eq!(names, ["Site clearing", "Framing"]);
}

#[rstest]
fn sort_by_priority_puts_critical_work_first() {
    let tasks = [
        sample_task("Landscaping", TaskStatus::NotStarted, TaskPriority::Low, None),
        sample_task("Crane lift", TaskStatus::NotStarted, TaskPriority::Critical, None),
        sample_task("Painting", TaskStatus::NotStarted, TaskPriority::Medium, None),
    ];
    let ordered = sort_by_priority(&tasks);
    let names: Vec<&str> = ordered.iter().map(|task| task.name()).collect();
    assert_eq!(names, ["Crane lift", "Painting", "Landscaping"]);
}

// ============================================================================
// Overdue detection
// ============================================================================

#[rstest]
fn overdue_tasks_selects_uncompleted_past_their_end_date(clock: FixtureClock) {
    let tasks = [
        dated_task("Excavation", TaskStatus::Completed, date(2026, 3, 10)),
        dated_task("Foundations", TaskStatus::Delayed, date(2026, 4, 1)),
        dated_task("Framing", TaskStatus::InProgress, date(2026, 5, 30)),
    ];
    let overdue = overdue_tasks(&tasks, &clock);
    let names: Vec<&str> = overdue.iter().map(|task| task.name()).collect();
    assert_eq!(names, ["Foundations"]);
}

#[rstest]
fn task_ending_today_is_not_overdue(clock: FixtureClock) {
    let tasks = [dated_task("Inspection", TaskStatus::InProgress, date(2026, 4, 15))];
    assert!(overdue_tasks(&tasks, &clock).is_empty());
}
