//! `PostgreSQL` adapter for contact message persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_SCHEMA_SQL, ContactPgPool, PostgresContactStore};
