//! Shared router state.

use std::sync::Arc;

use crate::contact::{ports::ContactMessageStore, services::ContactService};
use crate::cv::CvSource;

/// State handed to every handler.
///
/// Holds no per-request data; the contact store is the only shared mutable
/// resource and synchronises itself.
#[derive(Clone)]
pub struct AppState {
    /// Contact submission and listing.
    pub contacts: ContactService<dyn ContactMessageStore>,
    /// CV download location.
    pub cv: Arc<CvSource>,
}

impl AppState {
    /// Creates state over the given store and CV location.
    #[must_use]
    pub fn new(store: Arc<dyn ContactMessageStore>, cv: CvSource) -> Self {
        Self {
            contacts: ContactService::new(store),
            cv: Arc::new(cv),
        }
    }
}
