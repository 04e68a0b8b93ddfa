//! Persistence adapters for the contact module.
//!
//! Concrete implementations of the [`ContactMessageStore`] port.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryContactStore`]: lock-guarded in-process storage, the
//!   default when no database is configured
//! - [`postgres::PostgresContactStore`]: durable `PostgreSQL` persistence
//!   using Diesel
//!
//! [`ContactMessageStore`]: crate::contact::ports::store::ContactMessageStore

pub mod memory;
pub mod postgres;
