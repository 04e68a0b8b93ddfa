//! Service layer for contact submissions.
//!
//! [`ContactService`] runs a submission through validation and then into the
//! store. It keeps no state of its own between calls.

use crate::contact::{
    domain::{ContactMessage, ContactSubmission},
    error::{StoreError, ValidationError},
    ports::{ContactMessageStore, StoreResult},
    validation::ContactValidator,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for contact operations.
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// The submission broke one or more field rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for contact service operations.
pub type ContactServiceResult<T> = Result<T, ContactServiceError>;

/// Contact submission and listing orchestration.
///
/// `S` may be unsized, so `ContactService<dyn ContactMessageStore>` holds
/// whichever store was chosen at startup.
pub struct ContactService<S>
where
    S: ContactMessageStore + ?Sized,
{
    store: Arc<S>,
    validator: ContactValidator,
}

impl<S> Clone for ContactService<S>
where
    S: ContactMessageStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            validator: self.validator.clone(),
        }
    }
}

impl<S> ContactService<S>
where
    S: ContactMessageStore + ?Sized,
{
    /// Creates a service with the default validator.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_validator(store, ContactValidator::new())
    }

    /// Creates a service with a custom validator.
    #[must_use]
    pub const fn with_validator(store: Arc<S>, validator: ContactValidator) -> Self {
        Self { store, validator }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Validates a submission and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Validation`] without touching the store
    /// when any field is invalid, or [`ContactServiceError::Store`] when
    /// persistence fails.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> ContactServiceResult<ContactMessage> {
        let payload = self.validator.validate(submission).inspect_err(|err| {
            debug!(fields = ?err.fields(), "contact submission rejected");
        })?;
        let message = self.store.create(payload).await?;
        debug!(id = %message.id(), "contact message stored");
        Ok(message)
    }

    /// Returns every stored message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store fails.
    pub async fn list(&self) -> StoreResult<Vec<ContactMessage>> {
        self.store.list().await
    }
}
