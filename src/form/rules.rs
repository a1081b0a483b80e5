//! Individual field validation rules.
//!
//! Each rule is a pure function that validates one aspect of a raw form
//! input. Rules return `Ok(())` on success or a specific [`FieldError`]
//! on failure; none of them allocate beyond the error path.

use super::error::{FieldError, FieldResult, PasswordRequirement};
use regex::Regex;
use std::sync::LazyLock;

/// Matches `local@domain.tld`: exactly one `@`, a dotted domain, and a
/// TLD of two or more letters. Deliberately loose; no RFC 5322 ambitions.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$"));

/// Matches loose North-American numbers: optional `+` country code of one
/// to three digits, optional parenthesised area code, and space, hyphen,
/// or dot separators between the remaining 3-3-4 digit groups.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}$"));

/// Characters that satisfy the password special-character requirement.
const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Passwords shorter than this fail the length check.
const MIN_PASSWORD_LENGTH: usize = 8;

fn compile(pattern: &str) -> Regex {
    #[expect(
        clippy::expect_used,
        reason = "patterns are fixed at compile time and known to be valid"
    )]
    let regex = Regex::new(pattern).expect("field pattern should compile");
    regex
}

/// Validates that a mandatory field has a non-blank value.
///
/// # Errors
///
/// Returns [`FieldError::Required`] if the value is empty after trimming.
pub fn validate_required(value: &str, field: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(FieldError::required(field));
    }
    Ok(())
}

/// Validates an email address.
///
/// # Errors
///
/// Returns [`FieldError::Required`] if the value is empty after trimming,
/// or [`FieldError::InvalidEmail`] if it does not look like
/// `local@domain.tld`.
pub fn validate_email(value: &str) -> FieldResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::required("Email"));
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Validates an optional phone number. An empty value passes because phone
/// numbers are not mandatory on any form in the application.
///
/// # Errors
///
/// Returns [`FieldError::InvalidPhone`] if a non-empty value does not match
/// the loose North-American pattern.
pub fn validate_phone(value: &str) -> FieldResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if !PHONE_PATTERN.is_match(trimmed) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

/// Validates that a number lies within inclusive bounds.
///
/// # Errors
///
/// Returns [`FieldError::OutOfRange`] if `value` is below `min` or above
/// `max`.
pub fn validate_number_range(value: f64, min: f64, max: f64, field: &str) -> FieldResult {
    if value < min || value > max {
        return Err(FieldError::out_of_range(field, min, max));
    }
    Ok(())
}

/// Validates that a value has at least `min_length` characters. An empty
/// value counts as length zero, so it fails unless `min_length` is zero.
///
/// # Errors
///
/// Returns [`FieldError::TooShort`] if the character count is below
/// `min_length`.
pub fn validate_min_length(value: &str, min_length: usize, field: &str) -> FieldResult {
    if value.chars().count() < min_length {
        return Err(FieldError::too_short(field, min_length));
    }
    Ok(())
}

/// Validates password strength. Checks run in a fixed order and the first
/// failure wins: presence, length, uppercase, lowercase, digit, special
/// character.
///
/// # Errors
///
/// Returns [`FieldError::Required`], [`FieldError::TooShort`], or
/// [`FieldError::WeakPassword`] for the first unmet requirement.
pub fn validate_password(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::required("Password"));
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::too_short("Password", MIN_PASSWORD_LENGTH));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(FieldError::weak_password(PasswordRequirement::Uppercase));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(FieldError::weak_password(PasswordRequirement::Lowercase));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::weak_password(PasswordRequirement::Digit));
    }
    if !value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(FieldError::weak_password(
            PasswordRequirement::SpecialCharacter,
        ));
    }
    Ok(())
}
