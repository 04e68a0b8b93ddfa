//! Shared helpers for HTTP integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use folio::config::ServerConfig;
use folio::http::{AppState, build_router};
use folio::server::build_state;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Bytes written to the CV fixture.
pub const CV_BYTES: &[u8] = b"%PDF-1.4\n% folio test document\n";

/// A running server and the temporary directory backing its CV.
pub struct TestServer {
    /// Base URL such as `http://127.0.0.1:41234`.
    pub base_url: String,
    /// Holds the CV directory open for the server's lifetime.
    pub assets: TempDir,
}

impl TestServer {
    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Location of the CV file the server was configured with.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory path is not UTF-8.
    #[must_use]
    pub fn cv_path(&self) -> Utf8PathBuf {
        Utf8Path::from_path(self.assets.path())
            .expect("utf8 temp dir")
            .join("cv.pdf")
    }
}

/// Writes the CV fixture into `dir` and returns its path.
///
/// # Panics
///
/// Panics if the fixture cannot be written.
pub fn write_cv(dir: &TempDir) -> Utf8PathBuf {
    let path = Utf8Path::from_path(dir.path())
        .expect("utf8 temp dir")
        .join("cv.pdf");
    std::fs::write(&path, CV_BYTES).expect("write cv fixture");
    path
}

/// Serves `state` on an ephemeral port.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn serve_state(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, build_router(state, None))
            .await
            .expect("serve router");
    });
    format!("http://{addr}")
}

/// Starts a server with an in-memory store and, when `with_cv` is set, a CV
/// file on disk.
///
/// Configuration goes through [`ServerConfig::from_lookup`] and
/// [`build_state`] exactly as the binary does.
///
/// # Panics
///
/// Panics if setup fails.
pub async fn spawn_server(with_cv: bool) -> TestServer {
    let assets = tempfile::tempdir().expect("temp dir");
    let cv_path = if with_cv {
        write_cv(&assets)
    } else {
        Utf8Path::from_path(assets.path())
            .expect("utf8 temp dir")
            .join("cv.pdf")
    };

    let config = ServerConfig::from_lookup(|key| match key {
        "FOLIO_CV_PATH" => Some(cv_path.to_string()),
        "FOLIO_CV_FILENAME" => Some("Jane_Doe_CV.pdf".to_owned()),
        _ => None,
    })
    .expect("valid test configuration");
    let state = build_state(&config).await.expect("state builds");

    TestServer {
        base_url: serve_state(state).await,
        assets,
    }
}
