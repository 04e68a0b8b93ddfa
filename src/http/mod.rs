//! HTTP surface.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/api/contact` | [`handlers::submit_contact`] |
//! | GET | `/api/contact/messages` | [`handlers::list_messages`] |
//! | GET | `/api/cv/download` | [`handlers::download_cv`] |

pub mod error;
pub mod handlers;
pub mod state;

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use camino::Utf8Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use error::{ApiError, Issue};
pub use handlers::SubmitAccepted;
pub use state::AppState;

use handlers::{download_cv, list_messages, submit_contact};

/// Builds the application router.
///
/// When `static_dir` is given, paths that match no API route are served from
/// it, falling back to its `index.html` for client-side routes.
pub fn build_router(state: AppState, static_dir: Option<&Utf8Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/contact/messages", get(list_messages))
        .route("/api/cv/download", get(download_cv));

    let routed = match static_dir {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api,
    };

    routed
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
