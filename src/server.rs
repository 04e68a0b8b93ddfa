//! Process lifecycle: store selection, binding, and graceful shutdown.

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::{ConfigError, ServerConfig};
use crate::contact::{
    adapters::{memory::InMemoryContactStore, postgres::PostgresContactStore},
    error::StoreError,
    ports::ContactMessageStore,
};
use crate::cv::CvSource;
use crate::http::{AppState, build_router};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The message store could not be opened.
    #[error("failed to open message store: {0}")]
    Store(#[from] StoreError),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Builds handler state for `config`.
///
/// Uses `PostgreSQL` when a database URL is configured, creating the table if
/// needed, and an in-memory store otherwise.
///
/// # Errors
///
/// Returns [`ServerError::Store`] when the database cannot be reached.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let store: Arc<dyn ContactMessageStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresContactStore::connect(url, config.db_pool_size).await?;
            store.ensure_schema().await?;
            info!("using PostgreSQL message store");
            Arc::new(store)
        }
        None => {
            info!("using in-memory message store; messages are lost on restart");
            Arc::new(InMemoryContactStore::new())
        }
    };

    let cv = CvSource::new(config.cv_path.clone(), config.cv_download_name.clone());
    Ok(AppState::new(store, cv))
}

/// Runs the server with the given configuration until a shutdown signal.
///
/// # Errors
///
/// Returns [`ServerError`] when the store cannot be opened, the address
/// cannot be bound, or serving fails.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;
    let app = build_router(state, config.static_dir.as_deref());

    let address = config.bind_address();
    let listener = TcpListener::bind(address).await?;
    info!("serving on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Reads configuration from the environment and runs the server.
///
/// # Errors
///
/// See [`run`]; also fails when configuration is invalid.
pub async fn start_server() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    run(config).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(err) => {
                warn!("failed to listen for Ctrl+C: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
