//! HTTP error responses.
//!
//! Each variant maps to one status code and a fixed JSON body. Storage and
//! file errors are logged here and never echoed to the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::contact::error::{StoreError, ValidationError};
use crate::cv::CvError;

/// One entry of the `details` array in a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Path to the offending value; a single field name, or empty for the
    /// body as a whole.
    pub path: Vec<String>,
    /// Machine-readable code.
    pub code: &'static str,
    /// Human-readable reason.
    pub message: String,
}

impl Issue {
    /// Lists one issue per failing field.
    #[must_use]
    pub fn from_validation(err: &ValidationError) -> Vec<Self> {
        err.errors()
            .iter()
            .map(|field_error| Self {
                path: vec![field_error.field().as_str().to_owned()],
                code: field_error.violation().code(),
                message: field_error.violation().to_string(),
            })
            .collect()
    }
}

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submission broke one or more field rules.
    #[error(transparent)]
    InvalidSubmission(#[from] ValidationError),

    /// The request body was not JSON, or not a JSON object.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Persisting a submission failed.
    #[error("failed to submit message: {0}")]
    SubmitFailed(#[source] StoreError),

    /// Reading stored messages failed.
    #[error("failed to fetch messages: {0}")]
    FetchFailed(#[source] StoreError),

    /// No CV exists at the configured location.
    #[error("CV file not found")]
    CvNotFound,

    /// The CV exists but could not be served.
    #[error("CV unavailable: {0}")]
    CvUnavailable(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<CvError> for ApiError {
    fn from(err: CvError) -> Self {
        match err {
            CvError::NotFound(_) => Self::CvNotFound,
            CvError::Unreadable { .. } => Self::CvUnavailable(err.to_string()),
        }
    }
}

impl ApiError {
    /// Returns the status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSubmission(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::CvNotFound => StatusCode::NOT_FOUND,
            Self::SubmitFailed(_) | Self::FetchFailed(_) | Self::CvUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::InvalidSubmission(err) => {
                debug!("{err}");
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": Issue::from_validation(err),
                })
            }
            Self::MalformedBody(reason) => {
                debug!("{self}");
                let issue = Issue {
                    path: Vec::new(),
                    code: "invalid_type",
                    message: reason.clone(),
                };
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": vec![issue],
                })
            }
            Self::SubmitFailed(_) => {
                error!("Contact form error: {self}");
                json!({ "success": false, "error": "Failed to submit message" })
            }
            Self::FetchFailed(_) => {
                error!("Error fetching messages: {self}");
                json!({ "error": "Failed to fetch messages" })
            }
            Self::CvNotFound => json!({ "error": "CV file not found" }),
            Self::CvUnavailable(_) => {
                error!("{self}");
                json!({ "error": "Failed to read CV file" })
            }
        };

        (status, Json(body)).into_response()
    }
}
