//! Unit tests for the form validation module.
//!
//! Tests are organised by concern: individual rules and the composer,
//! covering happy paths, failure messages, and ordering guarantees.
