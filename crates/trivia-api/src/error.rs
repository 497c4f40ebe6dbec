use std::borrow::Cow;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Short phrase sent as `message` in the failure envelope.
///
/// The five statuses the API raises itself have fixed phrases that clients
/// match on; anything else falls back to the lower-cased canonical reason.
pub fn status_phrase(status: StatusCode) -> Cow<'static, str> {
    match status {
        StatusCode::BAD_REQUEST => Cow::Borrowed("bad request"),
        StatusCode::NOT_FOUND => Cow::Borrowed("resource not found"),
        StatusCode::METHOD_NOT_ALLOWED => Cow::Borrowed("method not allowed"),
        StatusCode::UNPROCESSABLE_ENTITY => Cow::Borrowed("unprocessable"),
        StatusCode::INTERNAL_SERVER_ERROR => Cow::Borrowed("internal server error"),
        other => Cow::Owned(
            other
                .canonical_reason()
                .unwrap_or("error")
                .to_lowercase(),
        ),
    }
}

/// Failure envelope: `{"success": false, "error": 404, "message": "resource not found"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: Cow<'static, str>,
}

impl ErrorBody {
    pub fn new(status: StatusCode) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: status_phrase(status),
        }
    }
}

/// Build the failure envelope response for any status.
pub fn error_response(status: StatusCode) -> Response {
    (status, Json(ErrorBody::new(status))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        error_response(status)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the expected shape
            JsonRejection::JsonDataError(err) => Self::Unprocessable(err.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Unprocessable(errors.to_string())
    }
}
