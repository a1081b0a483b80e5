//! Short-circuiting composition of field validation rules.
//!
//! Form components bind field labels and limits into rule closures up
//! front, then hand the composer the current value and the ordered rule
//! list on every change event.

use super::error::FieldResult;

/// Runs each rule against the value in order, returning the first failure.
///
/// There is no memoization and no async behaviour; every call evaluates
/// the rules afresh against the supplied value.
///
/// # Errors
///
/// Returns the first rule failure encountered; later rules are not
/// evaluated.
///
/// # Examples
///
/// ```
/// use nervi::form::{rules, validate_field};
///
/// let result = validate_field("ab", &[
///     &|v: &str| rules::validate_required(v, "Site name"),
///     &|v: &str| rules::validate_min_length(v, 3, "Site name"),
/// ]);
/// let error = result.expect_err("two characters is too short");
/// assert_eq!(error.to_string(), "Site name must be at least 3 characters");
/// ```
pub fn validate_field<T: ?Sized>(value: &T, rules: &[&dyn Fn(&T) -> FieldResult]) -> FieldResult {
    for rule in rules {
        rule(value)?;
    }
    Ok(())
}
