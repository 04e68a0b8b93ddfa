//! Contact message records, from raw submission to stored aggregate.
//!
//! A visitor's inquiry moves through three shapes:
//!
//! - [`ContactSubmission`]: the untrusted request body, every field optional
//! - [`NewContactMessage`]: the validated payload, produced only by the
//!   validator
//! - [`ContactMessage`]: the stored record, stamped with an id and creation
//!   time by the store

use super::ContactMessageId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw contact form input as received from a client.
///
/// Fields are optional, untyped JSON values so that an absent or wrongly
/// typed field surfaces as a field-level validation failure rather than a
/// deserialisation error of the whole body.
///
/// # Examples
///
/// ```
/// use folio::contact::domain::ContactSubmission;
///
/// let submission: ContactSubmission =
///     serde_json::from_str(r#"{"name":"Jane"}"#).expect("valid json");
/// assert_eq!(submission.name, Some("Jane".into()));
/// assert!(submission.email.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Visitor's name.
    #[serde(default)]
    pub name: Option<Value>,
    /// Visitor's email address.
    #[serde(default)]
    pub email: Option<Value>,
    /// Message body.
    #[serde(default)]
    pub message: Option<Value>,
}

impl ContactSubmission {
    /// Creates a submission with every field present.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            message: Some(Value::String(message.into())),
        }
    }
}

/// A contact payload that has passed validation.
///
/// Only the validator constructs this type, so holding one proves the name,
/// email and message rules were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
}

impl NewContactMessage {
    pub(crate) const fn from_validated(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    /// Returns the visitor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visitor's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Field values of a contact message read back from storage.
#[derive(Debug, Clone)]
pub struct PersistedContactMessage {
    /// Stored identifier.
    pub id: ContactMessageId,
    /// Stored name.
    pub name: String,
    /// Stored email address.
    pub email: String,
    /// Stored message body.
    pub message: String,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A stored contact message.
///
/// # Invariants
///
/// - `id` is unique within the store that created it
/// - `created_at` is set once, by the store, at creation
/// - the record is never modified after creation
///
/// # Examples
///
/// ```
/// use folio::contact::domain::{ContactMessage, ContactSubmission};
/// use folio::contact::validation::ContactValidator;
/// use mockable::DefaultClock;
///
/// let payload = ContactValidator::new()
///     .validate(&ContactSubmission::new(
///         "Jane",
///         "jane@x.com",
///         "Hello, I would like to connect.",
///     ))
///     .expect("valid submission");
/// let message = ContactMessage::new(payload, &DefaultClock);
///
/// assert_eq!(message.name(), "Jane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    id: ContactMessageId,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Stamps a validated payload with a fresh id and the clock's time.
    #[must_use]
    pub fn new(payload: NewContactMessage, clock: &impl Clock) -> Self {
        Self::with_id(ContactMessageId::new(), payload, clock)
    }

    /// Stamps a validated payload with the given id and the clock's time.
    #[must_use]
    pub fn with_id(id: ContactMessageId, payload: NewContactMessage, clock: &impl Clock) -> Self {
        let NewContactMessage {
            name,
            email,
            message,
        } = payload;
        Self {
            id,
            name,
            email,
            message,
            created_at: clock.utc(),
        }
    }

    /// Rebuilds a message from stored field values.
    #[must_use]
    pub fn from_persisted(data: PersistedContactMessage) -> Self {
        let PersistedContactMessage {
            id,
            name,
            email,
            message,
            created_at,
        } = data;
        Self {
            id,
            name,
            email,
            message,
            created_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> ContactMessageId {
        self.id
    }

    /// Returns the visitor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visitor's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
