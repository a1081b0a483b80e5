//! Form field validation.
//!
//! Every validator is a pure function mapping a raw input value to a
//! [`FieldResult`]: `Ok(())` when the value passes, or a [`FieldError`]
//! carrying the user-facing message when it does not. Failures are data,
//! never panics; no validator holds state between calls, so concurrent
//! invocation from any number of event handlers is safe by construction.
//!
//! # Example
//!
//! ```
//! use nervi::form::{rules, validate_field};
//!
//! let result = validate_field("ann@example.com", &[
//!     &|v: &str| rules::validate_required(v, "Email"),
//!     &|v: &str| rules::validate_email(v),
//! ]);
//! assert!(result.is_ok());
//! ```

pub mod composer;
pub mod error;
pub mod rules;

pub use composer::validate_field;
pub use error::{FieldError, FieldResult, PasswordRequirement};

#[cfg(test)]
mod tests;
