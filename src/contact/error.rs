//! Error types for contact validation and persistence.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// The visitor's name.
    Name,
    /// The visitor's email address.
    Email,
    /// The message body.
    Message,
}

impl ContactField {
    /// Returns the field name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a single field broke.
///
/// The display text is the human-readable reason shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    /// The field was absent from the submission.
    #[error("Required")]
    Missing,

    /// The field held a JSON value other than a string.
    #[error("Expected string, received {received}")]
    WrongType {
        /// JSON kind that was supplied, such as `number`.
        received: &'static str,
    },

    /// The name was empty.
    #[error("Name is required")]
    EmptyName,

    /// The email address is not syntactically valid.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The text is shorter than the configured minimum.
    #[error("Message must be at least {min} characters")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
        /// Number of characters supplied.
        actual: usize,
    },
}

impl FieldViolation {
    /// Returns a stable machine-readable code for the violation.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Missing | Self::WrongType { .. } => "invalid_type",
            Self::EmptyName | Self::TooShort { .. } => "too_small",
            Self::InvalidEmail => "invalid_string",
        }
    }
}

/// A validation failure tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {violation}")]
pub struct FieldError {
    field: ContactField,
    violation: FieldViolation,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub const fn new(field: ContactField, violation: FieldViolation) -> Self {
        Self { field, violation }
    }

    /// Returns the offending field.
    #[must_use]
    pub const fn field(&self) -> ContactField {
        self.field
    }

    /// Returns the broken rule.
    #[must_use]
    pub const fn violation(&self) -> &FieldViolation {
        &self.violation
    }
}

/// Every field-level failure found in one submission.
///
/// Never empty: the validator only builds one when at least one rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", format_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Returns the individual field errors in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the fields that failed, in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<ContactField> {
        self.errors.iter().map(FieldError::field).collect()
    }

    /// Returns `true` if the given field failed.
    #[must_use]
    pub fn has_field(&self, field: ContactField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// Errors raised by contact message stores.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing storage failed.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),

    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),
}

impl StoreError {
    /// Wraps a storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::storage(err)
    }
}
