//! Shared world state for contact submission BDD scenarios.

use reqwest::header::HeaderMap;
use rstest::fixture;
use serde_json::Value;

use crate::test_helpers::TestServer;

/// The last HTTP response seen by a scenario.
pub struct RecordedResponse {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Body parsed as JSON, when it was JSON.
    pub json: Option<Value>,
}

/// Scenario world for contact submission behaviour tests.
pub struct PortfolioWorld {
    /// HTTP client shared across steps.
    pub client: reqwest::Client,
    /// Server under test, started by a given step.
    pub server: Option<TestServer>,
    /// Last response received.
    pub last_response: Option<RecordedResponse>,
}

impl PortfolioWorld {
    /// Creates a world with no server running yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            server: None,
            last_response: None,
        }
    }

    /// Returns the running server.
    ///
    /// # Errors
    ///
    /// Returns an error when no given step started one.
    pub fn server(&self) -> Result<&TestServer, eyre::Report> {
        self.server
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no server running in scenario world"))
    }

    /// Returns the last recorded response.
    ///
    /// # Errors
    ///
    /// Returns an error when no request has been made.
    pub fn response(&self) -> Result<&RecordedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))
    }
}

impl Default for PortfolioWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PortfolioWorld {
    PortfolioWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Sends `request` and records the outcome.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or its body read.
pub async fn record(request: reqwest::RequestBuilder) -> Result<RecordedResponse, eyre::Report> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let bytes = response.bytes().await?;
    Ok(RecordedResponse {
        status,
        headers,
        json: serde_json::from_slice(&bytes).ok(),
    })
}
