//! Contact form validation.
//!
//! Individual rules live in [`rules`]; [`ContactValidator`] runs them all and
//! gathers every failure.

pub mod rules;
pub mod service;

pub use service::{ContactValidator, DEFAULT_MIN_MESSAGE_CHARS, ValidationConfig};
