//! Folio: contact and CV backend for a single-page portfolio site.
//!
//! Visitors submit contact messages, which are validated and stored; the
//! site owner lists them; anyone may download the owner's CV.
//!
//! # Architecture
//!
//! - **Domain**: contact submissions and stored messages ([`contact::domain`])
//! - **Ports**: the [`contact::ports::ContactMessageStore`] trait
//! - **Adapters**: in-memory and `PostgreSQL` stores ([`contact::adapters`])
//! - **HTTP**: axum router and handlers ([`http`])
//!
//! # Modules
//!
//! - [`config`]: environment-driven settings
//! - [`contact`]: validation, storage, and the contact service
//! - [`cv`]: CV file lookup
//! - [`http`]: routes, handlers, and error responses
//! - [`server`]: store selection, binding, and shutdown
//! - [`telemetry`]: log subscriber setup

pub mod config;
pub mod contact;
pub mod cv;
pub mod http;
pub mod server;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use server::{ServerError, start_server};
