//! Domain types for contact messages.
//!
//! Pure types with no infrastructure dependencies. Stored messages are
//! immutable and serialisable via serde.

mod ids;
mod message;

pub use ids::ContactMessageId;
pub use message::{
    ContactMessage, ContactSubmission, NewContactMessage, PersistedContactMessage,
};
