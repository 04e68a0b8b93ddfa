//! Folio server binary.

use std::process::ExitCode;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    folio::telemetry::init();

    match folio::start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
