//! Individual validation rules.
//!
//! Each rule is a pure function over one field of a
//! [`ContactSubmission`](crate::contact::domain::ContactSubmission). Rules
//! return the accepted value or a [`FieldError`] naming the field.

use crate::contact::error::{ContactField, FieldError, FieldViolation};
use email_address::{EmailAddress, Options};
use serde_json::Value;

/// Reads a submitted field as text.
///
/// An absent field yields `Ok(None)`, leaving the presence check to the
/// field's own rule.
///
/// # Errors
///
/// Returns [`FieldViolation::WrongType`] if the value is not a JSON string.
///
/// # Examples
///
/// ```
/// use folio::contact::error::ContactField;
/// use folio::contact::validation::rules::field_text;
/// use serde_json::json;
///
/// let name = json!("Jane");
/// assert_eq!(field_text(ContactField::Name, Some(&name)), Ok(Some("Jane")));
/// assert!(field_text(ContactField::Name, Some(&json!(42))).is_err());
/// ```
pub fn field_text(field: ContactField, value: Option<&Value>) -> Result<Option<&str>, FieldError> {
    match value {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(FieldError::new(
            field,
            FieldViolation::WrongType {
                received: json_kind(other),
            },
        )),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validates that a name is present and non-empty.
///
/// Whitespace counts as content; the name is stored as submitted.
///
/// # Errors
///
/// Returns [`FieldViolation::Missing`] if absent and
/// [`FieldViolation::EmptyName`] if empty.
pub fn validate_name(name: Option<&str>) -> Result<&str, FieldError> {
    let value = name.ok_or(FieldError::new(ContactField::Name, FieldViolation::Missing))?;
    if value.is_empty() {
        return Err(FieldError::new(ContactField::Name, FieldViolation::EmptyName));
    }
    Ok(value)
}

/// Validates that an email address is present and well-formed.
///
/// # Errors
///
/// Returns [`FieldViolation::Missing`] if absent and
/// [`FieldViolation::InvalidEmail`] if [`is_valid_email`] rejects it.
///
/// # Examples
///
/// ```
/// use folio::contact::validation::rules::validate_email;
///
/// assert!(validate_email(Some("jane@x.com")).is_ok());
/// assert!(validate_email(Some("bad")).is_err());
/// ```
pub fn validate_email(email: Option<&str>) -> Result<&str, FieldError> {
    let value = email.ok_or(FieldError::new(ContactField::Email, FieldViolation::Missing))?;
    if !is_valid_email(value) {
        return Err(FieldError::new(
            ContactField::Email,
            FieldViolation::InvalidEmail,
        ));
    }
    Ok(value)
}

/// Validates that a message is present and at least `min_chars` long.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Errors
///
/// Returns [`FieldViolation::Missing`] if absent and
/// [`FieldViolation::TooShort`] if shorter than `min_chars`.
pub fn validate_message(message: Option<&str>, min_chars: usize) -> Result<&str, FieldError> {
    let value = message.ok_or(FieldError::new(
        ContactField::Message,
        FieldViolation::Missing,
    ))?;
    let actual = value.chars().count();
    if actual < min_chars {
        return Err(FieldError::new(
            ContactField::Message,
            FieldViolation::TooShort {
                min: min_chars,
                actual,
            },
        ));
    }
    Ok(value)
}

/// Returns `true` for a bare addr-spec of the shape `local@domain.tld`.
///
/// Display-name forms such as `Jane <jane@x.com>` and dotless domains are
/// rejected.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let options = Options::default()
        .with_required_tld()
        .without_display_text();
    EmailAddress::parse_with_options(value, options)
        .is_ok_and(|address| has_dotted_domain(address.domain()))
}

fn has_dotted_domain(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
