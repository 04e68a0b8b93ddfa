//! Port trait definitions for the contact subsystem.

pub mod store;

pub use store::{ContactMessageStore, StoreResult};
