//! Store port for contact message persistence.
//!
//! Handlers and services only see this trait, so the backing medium can be
//! swapped (in-memory, `PostgreSQL`, ...) without touching them.

use crate::contact::{
    domain::{ContactMessage, NewContactMessage},
    error::StoreError,
};
use async_trait::async_trait;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for contact message persistence.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - ids are unique across every message the store has created
/// - `list` returns messages oldest first
/// - each `create` is atomic: it either persists a complete record or
///   nothing, even if the calling task is dropped mid-way
/// - concurrent callers need no external locking
#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    /// Assigns an id and creation time to a validated payload and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage fails. Nothing is
    /// persisted in that case.
    async fn create(&self, payload: NewContactMessage) -> StoreResult<ContactMessage>;

    /// Returns every stored message in creation order.
    ///
    /// Returns an empty vector if nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage fails.
    async fn list(&self) -> StoreResult<Vec<ContactMessage>>;
}
