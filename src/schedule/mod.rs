//! Typed schedule and team data layer.
//!
//! The source application loaded dashboard, team, and schedule data from
//! JSON and trusted the shapes it received. This module replaces that with
//! schema-validated parsing: raw serde records are converted into domain
//! types at the boundary, so every shape or value mismatch surfaces as a
//! typed error instead of propagating into the views.
//!
//! - Domain types in [`domain`]
//! - JSON boundary records and loaders in [`records`]
//! - Pure filtering and ordering utilities in [`filters`]

pub mod domain;
pub mod filters;
pub mod records;

pub use records::{DataError, load_tasks, load_team};

#[cfg(test)]
mod tests;
