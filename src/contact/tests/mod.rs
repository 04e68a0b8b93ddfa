//! Unit tests for the contact module.
//!
//! Organised by component: validation, the in-memory store, and the
//! service layer (with a mocked store for failure paths).
