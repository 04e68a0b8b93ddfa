//! Shared test helpers for in-memory store integration tests.

use std::io;
use std::sync::Arc;

use folio::contact::{
    adapters::memory::InMemoryContactStore, domain::ContactSubmission, services::ContactService,
};
use rstest::fixture;
use tokio::runtime::Runtime;

/// Service over an in-memory store.
pub type MemoryService = ContactService<InMemoryContactStore>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a service over a fresh store for each test.
#[fixture]
pub fn service() -> MemoryService {
    ContactService::new(Arc::new(InMemoryContactStore::new()))
}

/// A submission that passes every rule.
#[must_use]
pub fn valid_submission(name: &str) -> ContactSubmission {
    ContactSubmission::new(name, "visitor@example.org", "I would like to hear more.")
}
