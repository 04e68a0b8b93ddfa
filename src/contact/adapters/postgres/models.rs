//! Diesel row models for contact message persistence.

use super::schema::contact_messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for contact message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Visitor's name.
    pub name: String,
    /// Visitor's email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for contact message records.
///
/// `position` is omitted so the database sequence assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Visitor's name.
    pub name: String,
    /// Visitor's email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
