//! Contact message submission and storage.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::ContactSubmission`], [`domain::NewContactMessage`],
//!   [`domain::ContactMessage`]
//! - **Validation**: [`validation::ContactValidator`] gathers every field
//!   failure of a submission
//! - **Ports**: [`ports::ContactMessageStore`] with `create` and `list`
//! - **Adapters**: [`adapters::memory::InMemoryContactStore`] and
//!   [`adapters::postgres::PostgresContactStore`]
//! - **Services**: [`services::ContactService`] composes validator and store
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use folio::contact::adapters::memory::InMemoryContactStore;
//! use folio::contact::domain::ContactSubmission;
//! use folio::contact::services::ContactService;
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let service = ContactService::new(Arc::new(InMemoryContactStore::new()));
//! let stored = service
//!     .submit(&ContactSubmission::new(
//!         "Jane",
//!         "jane@x.com",
//!         "Hello, I would like to connect.",
//!     ))
//!     .await
//!     .expect("valid submission");
//!
//! let listed = service.list().await.expect("list succeeds");
//! assert_eq!(listed, vec![stored]);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
