//! Nervi: construction-project management core.
//!
//! This crate provides the framework-independent core of a construction
//! project management application: the form validation layer, a typed
//! schedule and team data layer, and a single observable theme store.
//!
//! # Architecture
//!
//! Rendering, routing, and styling live in the host application; this crate
//! ends at typed values and validation results handed to the view layer.
//!
//! - **Domain**: validated types with no infrastructure dependencies
//! - **Boundaries**: schema-validated JSON parsing instead of trusted casts
//! - **State**: process-wide theme preference behind one watch channel
//!
//! # Modules
//!
//! - [`form`]: pure field validators and the short-circuiting composer
//! - [`schedule`]: schedule/team domain types, JSON loading, and filters
//! - [`theme`]: observable theme preference store

pub mod form;
pub mod schedule;
pub mod theme;
