//! The contact form validator.
//!
//! Combines the individual rules into one pass that reports every failing
//! field rather than stopping at the first.

use crate::contact::{
    domain::{ContactSubmission, NewContactMessage},
    error::{ContactField, FieldError, ValidationError},
    validation::rules,
};

/// Minimum message length accepted by default.
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;

/// Tunable limits for contact validation.
///
/// # Examples
///
/// ```
/// use folio::contact::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_message_chars, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum message length in characters.
    pub min_message_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_message_chars: DEFAULT_MIN_MESSAGE_CHARS,
        }
    }
}

/// Validates raw contact submissions.
///
/// Stateless and cheap to clone.
///
/// # Examples
///
/// ```
/// use folio::contact::domain::ContactSubmission;
/// use folio::contact::error::ContactField;
/// use folio::contact::validation::ContactValidator;
///
/// let validator = ContactValidator::new();
/// let err = validator
///     .validate(&ContactSubmission::new("", "bad", "short"))
///     .expect_err("every field is invalid");
///
/// assert_eq!(
///     err.fields(),
///     vec![ContactField::Name, ContactField::Email, ContactField::Message]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactValidator {
    config: ValidationConfig,
}

impl ContactValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Checks every field and returns the validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing each failing field, in form order.
    pub fn validate(
        &self,
        submission: &ContactSubmission,
    ) -> Result<NewContactMessage, ValidationError> {
        let mut errors = Vec::new();

        let name = accept(
            &mut errors,
            rules::field_text(ContactField::Name, submission.name.as_ref())
                .and_then(rules::validate_name),
        );
        let email = accept(
            &mut errors,
            rules::field_text(ContactField::Email, submission.email.as_ref())
                .and_then(rules::validate_email),
        );
        let message = accept(
            &mut errors,
            rules::field_text(ContactField::Message, submission.message.as_ref()).and_then(
                |text| rules::validate_message(text, self.config.min_message_chars),
            ),
        );

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(NewContactMessage::from_validated(
                name.to_owned(),
                email.to_owned(),
                message.to_owned(),
            )),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

fn accept<'a>(
    errors: &mut Vec<FieldError>,
    result: Result<&'a str, FieldError>,
) -> Option<&'a str> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}
