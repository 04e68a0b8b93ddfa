//! Log subscriber setup.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if fmt().with_env_filter(filter).try_init().is_err() {
        debug!("tracing subscriber already installed");
    }
}
