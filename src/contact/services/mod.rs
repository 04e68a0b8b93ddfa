//! Orchestration services for contact messages.

mod submission;

pub use submission::{ContactService, ContactServiceError, ContactServiceResult};
