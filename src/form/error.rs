//! Error types for form field validation.
//!
//! Uses `thiserror` so that the `Display` output of each variant is exactly
//! the message rendered next to the offending form field. Variants carry
//! what the message needs and nothing else; a failed validation is a value,
//! never a panic.

use thiserror::Error;

/// Result type for field validation operations.
///
/// `Ok(())` means the field passed; `Err` carries the user-facing message,
/// so a message exists precisely when validation failed.
pub type FieldResult = Result<(), FieldError>;

/// Errors produced by field validators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// A mandatory field was empty or whitespace-only.
    #[error("{field} is required")]
    Required {
        /// Label of the empty field.
        field: String,
    },

    /// The value is not a plausible email address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The value is not a plausible phone number.
    #[error("Please enter a valid phone number")]
    InvalidPhone,

    /// A numeric value fell outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Label of the offending field.
        field: String,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A value has fewer characters than required.
    #[error("{field} must be at least {min_length} characters")]
    TooShort {
        /// Label of the offending field.
        field: String,
        /// Minimum number of characters.
        min_length: usize,
    },

    /// A password satisfied the length check but missed a character class.
    #[error("Password must contain at least {}", .requirement.as_str())]
    WeakPassword {
        /// The character class the password is missing.
        requirement: PasswordRequirement,
    },
}

impl FieldError {
    /// Creates a required-field error for the given label.
    #[must_use]
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    /// Creates an out-of-range error for the given label and bounds.
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates a too-short error for the given label and minimum length.
    #[must_use]
    pub fn too_short(field: impl Into<String>, min_length: usize) -> Self {
        Self::TooShort {
            field: field.into(),
            min_length,
        }
    }

    /// Creates a weak-password error for the given missing requirement.
    #[must_use]
    pub const fn weak_password(requirement: PasswordRequirement) -> Self {
        Self::WeakPassword { requirement }
    }
}

/// The character class a password failed to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one decimal digit.
    Digit,
    /// At least one character from the accepted punctuation set.
    SpecialCharacter,
}

impl PasswordRequirement {
    /// Returns the phrase spliced into the weak-password message.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uppercase => "one uppercase letter",
            Self::Lowercase => "one lowercase letter",
            Self::Digit => "one number",
            Self::SpecialCharacter => "one special character",
        }
    }
}
