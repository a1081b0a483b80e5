//! Domain types for schedules and crews.
//!
//! All types validate their invariants at construction and are immutable
//! afterwards; every value is serialisable via serde.

mod error;
mod ids;
mod task;
mod team;

pub use error::{
    ParseTaskPriorityError, ParseTaskStatusError, ParseTradeError, ScheduleDomainError,
};
pub use ids::{MemberId, TaskId};
pub use task::{Progress, ScheduleTask, ScheduleTaskParams, TaskPriority, TaskStatus};
pub use team::{TeamMember, TeamMemberParams, Trade};
