//! Request handlers.
//!
//! Each handler is a stateless function from one request to one response.
//! Outcomes are mapped to responses through [`ApiError`].

use axum::{
    Json,
    body::Body,
    extract::{State, rejection::JsonRejection},
    http::{
        HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, state::AppState};
use crate::contact::{
    domain::{ContactMessage, ContactMessageId, ContactSubmission},
    services::ContactServiceError,
};
use crate::cv::CV_CONTENT_TYPE;

/// Body of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAccepted {
    /// Always `true`.
    pub success: bool,
    /// Id of the stored message.
    pub id: ContactMessageId,
}

/// `POST /api/contact`
///
/// # Errors
///
/// Returns [`ApiError::MalformedBody`] or [`ApiError::InvalidSubmission`]
/// for bad input and [`ApiError::SubmitFailed`] when the store fails.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<SubmitAccepted>, ApiError> {
    let Json(submission) = payload?;

    let message = state
        .contacts
        .submit(&submission)
        .await
        .map_err(|err| match err {
            ContactServiceError::Validation(err) => ApiError::InvalidSubmission(err),
            ContactServiceError::Store(err) => ApiError::SubmitFailed(err),
        })?;

    Ok(Json(SubmitAccepted {
        success: true,
        id: message.id(),
    }))
}

/// `GET /api/contact/messages`
///
/// # Errors
///
/// Returns [`ApiError::FetchFailed`] when the store fails.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = state.contacts.list().await.map_err(ApiError::FetchFailed)?;
    Ok(Json(messages))
}

/// `GET /api/cv/download`
///
/// The body is streamed from the open file in chunks.
///
/// # Errors
///
/// Returns [`ApiError::CvNotFound`] when the file is absent and
/// [`ApiError::CvUnavailable`] when it cannot be opened or named.
pub async fn download_cv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let document = state.cv.open().await?;
    let disposition = HeaderValue::try_from(document.content_disposition())
        .map_err(|err| ApiError::CvUnavailable(format!("invalid download name: {err}")))?;
    let length = HeaderValue::from(document.size());

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(CV_CONTENT_TYPE)),
            (CONTENT_DISPOSITION, disposition),
            (CONTENT_LENGTH, length),
        ],
        Body::from_stream(document.into_chunks()),
    )
        .into_response())
}
