//! In-memory implementation of the `ContactMessageStore` port.
//!
//! Messages live in a vector behind an [`RwLock`]; contents are lost when
//! the process exits.

use std::fmt;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::contact::{
    domain::{ContactMessage, NewContactMessage},
    error::StoreError,
    ports::store::{ContactMessageStore, StoreResult},
};

/// In-memory implementation of [`ContactMessageStore`].
///
/// Clones share the same underlying storage.
///
/// # Example
///
/// ```
/// use folio::contact::adapters::memory::InMemoryContactStore;
///
/// let store = InMemoryContactStore::new();
/// assert!(store.is_empty());
/// ```
pub struct InMemoryContactStore<C = DefaultClock> {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryContactStore<C> {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemoryContactStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryContactStore")
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl InMemoryContactStore<DefaultClock> {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryContactStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryContactStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned. Use
    /// [`ContactMessageStore::list`] for error-propagating access.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C> ContactMessageStore for InMemoryContactStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, payload: NewContactMessage) -> StoreResult<ContactMessage> {
        let mut guard = self
            .messages
            .write()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        // Id generation and the push share one critical section.
        let message = ContactMessage::new(payload, self.clock.as_ref());
        guard.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> StoreResult<Vec<ContactMessage>> {
        let guard = self
            .messages
            .read()
            .map_err(|e| StoreError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard.clone())
    }
}
